use std::f64::consts::TAU;

use crate::{
    animation::interpolate::{Interp, ramp},
    animation::ops::stagger,
    composition::model::BurstSpec,
    eval::tree::ParticleNode,
    foundation::color::Hsl,
    foundation::core::{Fps, FrameIndex, Point, Vec2},
    foundation::error::ReelResult,
};

const PARTICLE_SATURATION: f64 = 0.8;
const PARTICLE_LIGHTNESS: f64 = 0.6;

/// Particles of `spec` at `frame`, emitted from `origin`.
///
/// Returns an empty list outside `[spec.frame, spec.frame + duration)`.
pub(crate) fn burst_particles(
    spec: &BurstSpec,
    frame: FrameIndex,
    fps: Fps,
    origin: Point,
) -> ReelResult<Vec<ParticleNode>> {
    if !spec.window().contains(frame) {
        return Ok(Vec::new());
    }

    // Fade in over the first half of the travel, out over the second.
    let fade = Interp::new(&[0.0, 0.5, 1.0], &[0.0, 1.0, 0.0])?;
    let count = spec.particle_count;
    let f = frame.as_f64();

    let particles = (0..count)
        .map(|i| {
            let share = f64::from(i) / f64::from(count);
            let angle_rad = TAU * share;
            let delay_frames = stagger(spec.frame as f64, i as usize, spec.stagger_frames);
            let progress = spec.spring.progress(f - delay_frames, fps);
            let distance_px = ramp(progress, 0.0, 1.0, 0.0, spec.max_distance_px);
            let dir = Vec2::new(angle_rad.cos(), angle_rad.sin());
            ParticleNode {
                index: i,
                angle_rad,
                delay_frames,
                progress,
                distance_px,
                position: origin + dir * distance_px,
                opacity: fade.sample(progress),
                scale: ramp(progress, 0.0, 1.0, 0.0, 1.0),
                size_px: spec.particle_size_px,
                color: Hsl::new(share * 360.0, PARTICLE_SATURATION, PARTICLE_LIGHTNESS),
            }
        })
        .collect();
    Ok(particles)
}

#[cfg(test)]
#[path = "../../tests/unit/eval/particles.rs"]
mod tests;
