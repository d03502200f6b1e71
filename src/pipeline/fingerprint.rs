use xxhash_rust::xxh3::Xxh3;

use crate::eval::tree::{ContentNode, RenderTree};
use crate::foundation::color::{Color, Hsl};
use crate::foundation::core::{Affine, Point};

const XXH3_SEED: u64 = 0x8b5ad4a0c7d8e9f1;

/// Stable 128-bit fingerprint of an evaluated frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameFingerprint {
    pub hi: u64,
    pub lo: u64,
}

impl std::fmt::Display for FrameFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}{:016x}", self.hi, self.lo)
    }
}

/// Fingerprint a render tree.
///
/// The frame index is not hashed, so visually identical frames share a fingerprint.
pub fn fingerprint_tree(tree: &RenderTree) -> FrameFingerprint {
    let mut h = StableHasher::new();
    write_tree(&mut h, tree);
    h.finish()
}

/// Order-sensitive digest of a sequence of frame fingerprints.
pub fn fingerprint_sequence<'a>(
    fingerprints: impl IntoIterator<Item = &'a FrameFingerprint>,
) -> FrameFingerprint {
    let mut h = StableHasher::new();
    let mut n = 0u64;
    for fp in fingerprints {
        h.write_u64(fp.hi);
        h.write_u64(fp.lo);
        n += 1;
    }
    h.write_u64(n);
    h.finish()
}

struct StableHasher {
    inner: Xxh3,
}

impl StableHasher {
    fn new() -> Self {
        Self {
            inner: Xxh3::with_seed(XXH3_SEED),
        }
    }

    fn write_bytes(&mut self, b: &[u8]) {
        self.inner.update(b);
    }

    fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }

    fn write_bool(&mut self, v: bool) {
        self.write_u8(u8::from(v));
    }

    fn write_u32(&mut self, v: u32) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_f64(&mut self, v: f64) {
        self.write_u64(v.to_bits());
    }

    fn write_str(&mut self, s: &str) {
        self.write_u64(s.len() as u64);
        self.write_bytes(s.as_bytes());
    }

    fn write_point(&mut self, p: Point) {
        self.write_f64(p.x);
        self.write_f64(p.y);
    }

    fn write_affine(&mut self, a: Affine) {
        for c in a.as_coeffs() {
            self.write_f64(c);
        }
    }

    fn write_color(&mut self, c: Color) {
        for v in [c.r, c.g, c.b, c.a] {
            self.write_f64(v);
        }
    }

    fn write_hsl(&mut self, c: Hsl) {
        self.write_f64(c.h);
        self.write_f64(c.s);
        self.write_f64(c.l);
    }

    fn finish(self) -> FrameFingerprint {
        let v = self.inner.digest128();
        FrameFingerprint {
            hi: (v >> 64) as u64,
            lo: v as u64,
        }
    }
}

fn write_tree(h: &mut StableHasher, tree: &RenderTree) {
    h.write_str(&tree.composition);
    h.write_u32(tree.canvas.width);
    h.write_u32(tree.canvas.height);

    h.write_f64(tree.background.angle_deg);
    for stop in tree.background.stops {
        h.write_hsl(stop);
    }

    h.write_u32(tree.orbs.len() as u32);
    for o in &tree.orbs {
        h.write_point(o.center);
        h.write_f64(o.size_px);
        h.write_color(o.color);
        h.write_f64(o.scale);
        h.write_f64(o.opacity);
        h.write_f64(o.blur_px);
    }

    h.write_u32(tree.scenes.len() as u32);
    for s in &tree.scenes {
        h.write_str(&s.id);
        h.write_u64(s.window.start.0);
        h.write_u64(s.window.end.0);
        h.write_f64(s.opacity);
        write_content(h, &s.content);
    }
}

fn write_content(h: &mut StableHasher, content: &ContentNode) {
    match content {
        ContentNode::Prompt(p) => {
            h.write_u8(0);
            h.write_str(&p.title);
            h.write_str(&p.prompt);
            h.write_f64(p.scale);
            h.write_affine(p.transform);
            h.write_bool(p.cursor_visible);
            h.write_str(&p.cursor_glyph);
        }
        ContentNode::Burst(b) => {
            h.write_u8(1);
            h.write_str(&b.headline);
            h.write_u32(b.particles.len() as u32);
            for p in &b.particles {
                h.write_u32(p.index);
                h.write_f64(p.angle_rad);
                h.write_f64(p.delay_frames);
                h.write_f64(p.progress);
                h.write_f64(p.distance_px);
                h.write_point(p.position);
                h.write_f64(p.opacity);
                h.write_f64(p.scale);
                h.write_f64(p.size_px);
                h.write_hsl(p.color);
            }
        }
        ContentNode::Steps(s) => {
            h.write_u8(2);
            h.write_str(&s.heading);
            h.write_u32(s.steps.len() as u32);
            for step in &s.steps {
                h.write_str(&step.label);
                h.write_f64(step.progress);
                h.write_f64(step.opacity);
                h.write_f64(step.offset_x);
                h.write_bool(step.done);
            }
        }
        ContentNode::Reveal(r) => {
            h.write_u8(3);
            h.write_str(&r.heading);
            h.write_str(&r.subtitle);
            h.write_str(&r.tagline);
            h.write_f64(r.scale);
            h.write_f64(r.rotation_deg);
            h.write_affine(r.transform);
            h.write_f64(r.shine_rotation_deg);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/fingerprint.rs"]
mod tests;
