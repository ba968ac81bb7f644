use rand::Rng;

use crate::error::AugmentError;

/// A closed range `[min, max]` that a parameter is drawn from uniformly, once per image.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ParamRange {
    pub min: f32,
    pub max: f32,
}

impl ParamRange {
    pub fn new(min: f32, max: f32) -> Self {
        ParamRange { min, max }
    }

    /// A range that always yields `value`.
    pub fn constant(value: f32) -> Self {
        ParamRange {
            min: value,
            max: value,
        }
    }

    /// `[-extent, extent]`
    pub fn symmetric(extent: f32) -> Self {
        ParamRange {
            min: -extent,
            max: extent,
        }
    }

    /// Degenerate ranges return their single value without touching the random source.
    /// `name` identifies the parameter in the error for a malformed range.
    pub fn sample<R: Rng + ?Sized>(
        &self,
        name: &'static str,
        rng: &mut R,
    ) -> Result<f32, AugmentError> {
        // the generator needs headroom above the width of the range
        let too_wide = !((self.max - self.min) * 2.0).is_finite();
        if !self.min.is_finite() || !self.max.is_finite() || self.min > self.max || too_wide {
            return Err(AugmentError::InvalidRange {
                name,
                min: self.min,
                max: self.max,
            });
        }
        if self.min == self.max {
            return Ok(self.min);
        }
        Ok(rng.gen_range(self.min..=self.max))
    }
}

/// Checks that a sampled probability-like value lies within `[0, 1]`.
pub fn unit_interval(name: &'static str, value: f32) -> Result<f32, AugmentError> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(AugmentError::InvalidParameter { name, value })
    }
}
