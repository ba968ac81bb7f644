//! Ghosting from lateral motion: a shifted copy of the image is blended over it.

use image::{DynamicImage, ImageBuffer, Pixel};
use imageproc::{definitions::Clamp, geometric_transformations::Projection};
use rand::Rng;
use tracing::trace;

use super::affine::{warp_buffer, Offset};
use crate::{
    buffer::{with_buffer, Sample},
    error::AugmentError,
    sampling::{unit_interval, ParamRange},
};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MotionGhost {
    /// Weight of the ghost in the blend, 0 to 1
    pub alpha: ParamRange,
    /// Maximum ghost displacement along each axis as a fraction of the frame
    pub shift: f32,
}

impl MotionGhost {
    pub fn new(min_alpha: f32, max_alpha: f32, shift: f32) -> Self {
        MotionGhost {
            alpha: ParamRange::new(min_alpha, max_alpha),
            shift,
        }
    }
}

/// `alpha` is sampled first, then the ghost offset. The same weight applies to every channel.
pub fn motion_ghost<R: Rng + ?Sized>(
    image: &mut DynamicImage,
    params: &MotionGhost,
    rng: &mut R,
) -> Result<(), AugmentError> {
    let alpha = unit_interval("alpha", params.alpha.sample("alpha", rng)?)?;
    let offset = Offset::sample(params.shift, image.width(), image.height(), rng)?;
    trace!(alpha, x = offset.x, y = offset.y, "motion ghost");

    // a ghost with no weight or no displacement is invisible
    if alpha == 0.0 || offset.is_zero() {
        return Ok(());
    }
    let projection = offset.projection();
    with_buffer!(image, |buffer| blend_ghost(buffer, &projection, alpha))
}

fn blend_ghost<P>(
    buffer: &mut ImageBuffer<P, Vec<P::Subpixel>>,
    projection: &Projection,
    alpha: f32,
) where
    P: 'static + Pixel + Send + Sync,
    P::Subpixel: Sample + Clamp<f32>,
{
    let ghost = warp_buffer(buffer, projection);
    for (pixel, ghost_pixel) in buffer.pixels_mut().zip(ghost.pixels()) {
        let channels = pixel.channels_mut().iter_mut().zip(ghost_pixel.channels());
        for (value, ghost_value) in channels {
            let blended = (1.0 - alpha) * value.to_f32() + alpha * ghost_value.to_f32();
            *value = P::Subpixel::from_f32(blended);
        }
    }
}
