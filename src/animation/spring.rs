//! Damped-spring progress curves.
//!
//! A spring animates from `0` toward `1` starting at rest. Progress is a closed-form function of
//! elapsed time `t = frame / fps`; there is no integration state, so any frame can be sampled
//! independently.
//!
//! - `zeta < 1` (underdamped): `1 - e^(-zeta*w0*t) * (cos(w1*t) + zeta*w0/w1 * sin(w1*t))`
//! - `zeta >= 1`: `1 - e^(-w0*t) * (1 + w0*t)`
//!
//! where `w0 = sqrt(stiffness / mass)`, `zeta = damping / (2*sqrt(stiffness*mass))` and
//! `w1 = w0*sqrt(1 - zeta^2)`. Heavily damped springs use the critically-damped response, which
//! settles faster than a true overdamped solution.

use crate::{
    foundation::core::Fps,
    foundation::error::{ReelError, ReelResult},
};

/// Physical-ish spring parameters.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpringConfig {
    /// Damping coefficient; higher values settle with less bounce.
    #[serde(default = "default_damping")]
    pub damping: f64,
    /// Mass; higher values respond more slowly.
    #[serde(default = "default_mass")]
    pub mass: f64,
    /// Stiffness; higher values respond faster.
    #[serde(default = "default_stiffness")]
    pub stiffness: f64,
    /// Never move past the target when `true`.
    #[serde(default)]
    pub overshoot_clamping: bool,
}

fn default_damping() -> f64 {
    10.0
}

fn default_mass() -> f64 {
    1.0
}

fn default_stiffness() -> f64 {
    100.0
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            damping: default_damping(),
            mass: default_mass(),
            stiffness: default_stiffness(),
            overshoot_clamping: false,
        }
    }
}

impl SpringConfig {
    /// Default stiffness with the given damping and mass.
    pub fn new(damping: f64, mass: f64) -> Self {
        Self {
            damping,
            mass,
            ..Self::default()
        }
    }

    /// Override stiffness.
    pub fn stiffness(mut self, stiffness: f64) -> Self {
        self.stiffness = stiffness;
        self
    }

    /// Clamp overshoot at the target.
    pub fn clamped(mut self) -> Self {
        self.overshoot_clamping = true;
        self
    }

    /// Damping ratio `zeta`.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Validate parameter ranges.
    pub fn validate(&self) -> ReelResult<()> {
        if !self.damping.is_finite() || self.damping < 0.0 {
            return Err(ReelError::animation(
                "spring damping must be finite and >= 0",
            ));
        }
        if !self.mass.is_finite() || self.mass <= 0.0 {
            return Err(ReelError::animation("spring mass must be finite and > 0"));
        }
        if !self.stiffness.is_finite() || self.stiffness <= 0.0 {
            return Err(ReelError::animation(
                "spring stiffness must be finite and > 0",
            ));
        }
        Ok(())
    }

    /// Progress from `0` to `1` after `frame` frames; `0` for `frame <= 0`.
    pub fn progress(&self, frame: f64, fps: Fps) -> f64 {
        if !(frame > 0.0) {
            return 0.0;
        }
        let t = fps.frames_to_secs(frame);
        let w0 = (self.stiffness / self.mass).sqrt();
        let zeta = self.damping_ratio();

        let p = if zeta < 1.0 {
            let w1 = w0 * (1.0 - zeta * zeta).sqrt();
            let envelope = (-zeta * w0 * t).exp();
            1.0 - envelope * ((w1 * t).cos() + (zeta * w0 / w1) * (w1 * t).sin())
        } else {
            let envelope = (-w0 * t).exp();
            1.0 - envelope * (1.0 + w0 * t)
        };

        if self.overshoot_clamping {
            p.min(1.0)
        } else {
            p
        }
    }
}

/// Spring value moving from `from` to `to`, sampled at `frame` frames after its start.
pub fn spring(frame: f64, fps: Fps, config: &SpringConfig, from: f64, to: f64) -> f64 {
    from + (to - from) * config.progress(frame, fps)
}

const MAX_SETTLE_FRAMES: u64 = 100_000;

/// Frame count after which the spring stays within `threshold` of its target.
///
/// The first frame under the threshold is confirmed over the next 20 frames, restarting the
/// confirmation whenever a bounce leaves the band.
pub fn measure_spring(fps: Fps, config: &SpringConfig, threshold: f64) -> ReelResult<u64> {
    config.validate()?;
    if !threshold.is_finite() || threshold <= 0.0 {
        return Err(ReelError::animation(
            "spring settle threshold must be finite and > 0",
        ));
    }

    let diff = |frame: u64| (1.0 - config.progress(frame as f64, fps)).abs();

    let mut frame = 0u64;
    while diff(frame) >= threshold {
        frame += 1;
        if frame > MAX_SETTLE_FRAMES {
            return Err(ReelError::animation(format!(
                "spring did not settle within {MAX_SETTLE_FRAMES} frames"
            )));
        }
    }

    let mut finished = frame;
    let mut quiet = 0;
    while quiet < 20 {
        frame += 1;
        if diff(frame) >= threshold {
            quiet = 0;
            finished = frame + 1;
        } else {
            quiet += 1;
        }
        if frame > MAX_SETTLE_FRAMES {
            return Err(ReelError::animation(format!(
                "spring did not settle within {MAX_SETTLE_FRAMES} frames"
            )));
        }
    }
    Ok(finished)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
