use std::collections::HashSet;

use rayon::prelude::*;

use crate::{
    composition::model::Composition,
    eval::evaluator::eval_frame_unchecked,
    eval::tree::RenderTree,
    foundation::core::{FrameIndex, FrameRange},
    foundation::error::{ReelError, ReelResult},
    pipeline::fingerprint::{FrameFingerprint, fingerprint_sequence, fingerprint_tree},
};

/// Evaluate every frame of `range`, in order, on the calling thread.
pub fn eval_frames(comp: &Composition, range: FrameRange) -> ReelResult<Vec<RenderTree>> {
    eval_range(comp, range, &EvalThreading::default(), |_| {}).map(|(trees, _)| trees)
}

/// How [`eval_frames_with_stats`] spreads work.
#[derive(Clone, Debug)]
pub struct EvalThreading {
    /// Evaluate chunks on a rayon pool.
    pub parallel: bool,
    /// Frames per chunk; `0` is treated as `1`.
    pub chunk_size: usize,
    /// Pool size; `None` uses rayon's default.
    pub threads: Option<usize>,
}

impl Default for EvalThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 64,
            threads: None,
        }
    }
}

/// Counters from a range evaluation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EvalStats {
    pub frames_total: u64,
    /// Frames whose fingerprint had not been seen earlier in the range.
    pub frames_unique: u64,
    pub chunks: u64,
}

/// Evaluate `range`, sequentially or in parallel chunks, returning trees in frame order.
pub fn eval_frames_with_stats(
    comp: &Composition,
    range: FrameRange,
    threading: &EvalThreading,
) -> ReelResult<(Vec<RenderTree>, EvalStats)> {
    let mut seen = HashSet::<FrameFingerprint>::new();
    let mut unique = 0u64;
    let (trees, mut stats) = eval_range(comp, range, threading, |trees| {
        for tree in trees {
            if seen.insert(fingerprint_tree(tree)) {
                unique += 1;
            }
        }
    })?;
    stats.frames_unique = unique;
    Ok((trees, stats))
}

/// Fingerprint of every frame in `range`, in order.
pub fn fingerprint_range(
    comp: &Composition,
    range: FrameRange,
    threading: &EvalThreading,
) -> ReelResult<Vec<FrameFingerprint>> {
    let mut fps = Vec::with_capacity(range.len_frames().min(4096) as usize);
    eval_range(comp, range, threading, |trees| {
        fps.extend(trees.iter().map(fingerprint_tree));
    })?;
    Ok(fps)
}

/// Chunked range evaluation. `on_chunk` sees each chunk's trees in frame order.
///
/// The returned stats leave `frames_unique` at zero.
#[tracing::instrument(skip(comp, threading, on_chunk), fields(comp = %comp.id, start = range.start.0, end = range.end.0))]
fn eval_range(
    comp: &Composition,
    range: FrameRange,
    threading: &EvalThreading,
    mut on_chunk: impl FnMut(&[RenderTree]),
) -> ReelResult<(Vec<RenderTree>, EvalStats)> {
    validate_range(comp, range)?;
    comp.validate()?;

    let chunk_size = normalized_chunk_size(threading.chunk_size);
    let pool = if threading.parallel {
        Some(build_thread_pool(threading.threads)?)
    } else {
        None
    };

    let mut out = Vec::with_capacity(range.len_frames().min(4096) as usize);
    let mut stats = EvalStats::default();

    let mut chunk_start = range.start.0;
    while chunk_start < range.end.0 {
        let chunk_end = chunk_start.saturating_add(chunk_size).min(range.end.0);
        let chunk = FrameRange::new(FrameIndex(chunk_start), FrameIndex(chunk_end))
            .map_err(|e| ReelError::evaluation(format!("invalid chunk range: {e}")))?;

        let trees = match &pool {
            Some(pool) => eval_chunk_parallel(comp, chunk, pool)?,
            None => eval_chunk_sequential(comp, chunk)?,
        };
        tracing::debug!(start = chunk_start, end = chunk_end, "evaluated chunk");

        on_chunk(&trees);
        stats.frames_total += chunk.len_frames();
        stats.chunks += 1;
        out.extend(trees);
        chunk_start = chunk_end;
    }

    Ok((out, stats))
}

/// Single digest over all frames of `range`.
pub fn digest_range(
    comp: &Composition,
    range: FrameRange,
    threading: &EvalThreading,
) -> ReelResult<FrameFingerprint> {
    let fps = fingerprint_range(comp, range, threading)?;
    Ok(fingerprint_sequence(&fps))
}

fn validate_range(comp: &Composition, range: FrameRange) -> ReelResult<()> {
    if range.start.0 > range.end.0 {
        return Err(ReelError::validation("frame range start must be <= end"));
    }
    if range.is_empty() {
        return Err(ReelError::validation("frame range must be non-empty"));
    }
    if range.end.0 > comp.duration.0 {
        return Err(ReelError::validation(format!(
            "frame range end {} exceeds composition duration {}",
            range.end.0, comp.duration.0
        )));
    }
    Ok(())
}

fn eval_chunk_sequential(comp: &Composition, range: FrameRange) -> ReelResult<Vec<RenderTree>> {
    (range.start.0..range.end.0)
        .map(|f| eval_frame_unchecked(comp, FrameIndex(f)))
        .collect()
}

fn eval_chunk_parallel(
    comp: &Composition,
    range: FrameRange,
    pool: &rayon::ThreadPool,
) -> ReelResult<Vec<RenderTree>> {
    pool.install(|| {
        (range.start.0..range.end.0)
            .into_par_iter()
            .map(|f| eval_frame_unchecked(comp, FrameIndex(f)))
            .collect::<ReelResult<Vec<_>>>()
    })
}

fn build_thread_pool(threads: Option<usize>) -> ReelResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(ReelError::validation(
            "threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| ReelError::evaluation(format!("failed to build rayon thread pool: {e}")))
}

fn normalized_chunk_size(chunk_size: usize) -> u64 {
    if chunk_size == 0 {
        1
    } else {
        chunk_size as u64
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/frames.rs"]
mod tests;
