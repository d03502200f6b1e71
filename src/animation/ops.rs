use crate::animation::interpolate::ramp;

/// Entry/exit visibility: `min(ramp 0->1 over fade_in, ramp 1->0 over fade_out)`.
///
/// A missing `fade_out` never fades. Result is in `[0, 1]`.
pub fn fade_in_out(frame: f64, fade_in: [f64; 2], fade_out: Option<[f64; 2]>) -> f64 {
    let entry = ramp(frame, fade_in[0], fade_in[1], 0.0, 1.0);
    let exit = fade_out.map_or(1.0, |[s, e]| ramp(frame, s, e, 1.0, 0.0));
    entry.min(exit).clamp(0.0, 1.0)
}

/// Two-state toggle: `true` on even `floor(frame / period)`.
pub fn blink(frame: u64, period: u64) -> bool {
    if period == 0 {
        return true;
    }
    (frame / period) % 2 == 0
}

/// Wrap an angle into `[0, 360)`.
pub fn wrap_degrees(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}

/// Delay of the `index`-th item in a staggered group.
pub fn stagger(base: f64, index: usize, step: f64) -> f64 {
    base + index as f64 * step
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ops.rs"]
mod tests;
