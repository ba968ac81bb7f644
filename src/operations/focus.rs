//! Out of focus images, simulated with a Gaussian blur.

use image::DynamicImage;
use rand::Rng;
use tracing::trace;

use crate::{error::AugmentError, sampling::ParamRange};

/// Standard deviations below this leave the image unchanged
pub const MIN_SIGMA: f32 = 1e-3;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Focus {
    /// Standard deviation of the blur; 0 means no blur
    pub sigma: ParamRange,
}

impl Focus {
    pub fn new(mean: f32, sigma: f32) -> Self {
        Focus {
            sigma: ParamRange::new(mean, sigma),
        }
    }
}

pub fn focus<R: Rng + ?Sized>(
    image: &mut DynamicImage,
    params: &Focus,
    rng: &mut R,
) -> Result<(), AugmentError> {
    let sigma = params.sigma.sample("sigma", rng)?;
    trace!(sigma, "focus");
    if sigma < 0.0 {
        return Err(AugmentError::InvalidParameter {
            name: "sigma",
            value: sigma,
        });
    }
    if sigma >= MIN_SIGMA {
        *image = image.blur(sigma);
    }
    Ok(())
}
