use smallvec::SmallVec;

use crate::{
    animation::ease::Ease,
    foundation::error::{ReelError, ReelResult},
};

/// Behavior for inputs outside the declared input range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Extrapolate {
    /// Hold the nearest output value.
    #[default]
    Clamp,
    /// Continue the boundary segment linearly.
    Extend,
    /// Return the input unchanged.
    Identity,
}

/// Piecewise interpolation from an input range to an output range.
///
/// Knots must be finite, the same length (at least two) and the input strictly increasing.
/// Both sides clamp unless configured otherwise.
#[derive(Clone, Debug, PartialEq)]
pub struct Interp {
    input: SmallVec<[f64; 4]>,
    output: SmallVec<[f64; 4]>,
    ease: Ease,
    left: Extrapolate,
    right: Extrapolate,
}

impl Interp {
    /// Validate knots and build a clamped, linear interpolation.
    pub fn new(input: &[f64], output: &[f64]) -> ReelResult<Self> {
        if input.len() != output.len() {
            return Err(ReelError::animation(format!(
                "input range ({} knots) and output range ({} knots) must have the same length",
                input.len(),
                output.len()
            )));
        }
        if input.len() < 2 {
            return Err(ReelError::animation(
                "interpolation needs at least two knots",
            ));
        }
        if !input.iter().chain(output).all(|v| v.is_finite()) {
            return Err(ReelError::animation("interpolation knots must be finite"));
        }
        if !input.windows(2).all(|w| w[0] < w[1]) {
            return Err(ReelError::animation(format!(
                "input range must be strictly increasing, got {input:?}"
            )));
        }
        Ok(Self {
            input: SmallVec::from_slice(input),
            output: SmallVec::from_slice(output),
            ease: Ease::Linear,
            left: Extrapolate::Clamp,
            right: Extrapolate::Clamp,
        })
    }

    /// Apply `ease` within each segment; rejects malformed cubic-bezier curves.
    pub fn ease(mut self, ease: Ease) -> ReelResult<Self> {
        ease.validate()?;
        self.ease = ease;
        Ok(self)
    }

    /// Set both extrapolation sides.
    pub fn extrapolate(mut self, left: Extrapolate, right: Extrapolate) -> Self {
        self.left = left;
        self.right = right;
        self
    }

    /// Sample the mapping at `x`.
    pub fn sample(&self, x: f64) -> f64 {
        let seg = self.segment_for(x);
        let (in_min, in_max) = (self.input[seg], self.input[seg + 1]);
        let (out_min, out_max) = (self.output[seg], self.output[seg + 1]);

        let mut x = x;
        if x < in_min {
            match self.left {
                Extrapolate::Identity => return x,
                Extrapolate::Clamp => x = in_min,
                Extrapolate::Extend => {}
            }
        }
        if x > in_max {
            match self.right {
                Extrapolate::Identity => return x,
                Extrapolate::Clamp => x = in_max,
                Extrapolate::Extend => {}
            }
        }

        if out_min == out_max {
            return out_min;
        }

        let t = (x - in_min) / (in_max - in_min);
        // Ease clamps its input, so extended segments stay linear.
        let t = if (0.0..=1.0).contains(&t) {
            self.ease.apply(t)
        } else {
            t
        };
        out_min + t * (out_max - out_min)
    }

    fn segment_for(&self, x: f64) -> usize {
        let last_seg = self.input.len() - 2;
        let mut seg = 0;
        for i in 1..self.input.len() - 1 {
            if self.input[i] > x {
                break;
            }
            seg = i;
        }
        seg.min(last_seg)
    }
}

/// One-shot clamped linear interpolation.
///
/// Convenience wrapper over [`Interp`] for call sites that do not reuse the knots.
pub fn interpolate(x: f64, input: &[f64], output: &[f64]) -> ReelResult<f64> {
    Ok(Interp::new(input, output)?.sample(x))
}

/// Two-point clamped linear ramp with no validation.
///
/// Degenerate ranges (`in0 >= in1`) step at `in0`.
pub(crate) fn ramp(x: f64, in0: f64, in1: f64, out0: f64, out1: f64) -> f64 {
    if in1 <= in0 {
        return if x < in0 { out0 } else { out1 };
    }
    let t = ((x - in0) / (in1 - in0)).clamp(0.0, 1.0);
    out0 + t * (out1 - out0)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interpolate.rs"]
mod tests;
