//! Position errors: the subject is shifted and zoomed within the frame,
//! cutting parts of it off.

use image::DynamicImage;
use rand::Rng;
use tracing::trace;

use super::affine::{fill_black, warp_image, zoom_projection, Offset};
use crate::{error::AugmentError, sampling::ParamRange};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PositionError {
    /// Zoom factor, 1 means no zoom
    pub scale: ParamRange,
    /// Maximum shift along each axis as a fraction of the frame
    pub shift: f32,
}

impl PositionError {
    pub fn new(min_scale: f32, max_scale: f32, shift: f32) -> Self {
        PositionError {
            scale: ParamRange::new(min_scale, max_scale),
            shift,
        }
    }
}

/// Translates first, then zooms about the centre. Both are sampled per image, in that order.
pub fn position_error<R: Rng + ?Sized>(
    image: &mut DynamicImage,
    params: &PositionError,
    rng: &mut R,
) -> Result<(), AugmentError> {
    let (width, height) = (image.width(), image.height());
    let offset = Offset::sample(params.shift, width, height, rng)?;
    let zoom = params.scale.sample("scale", rng)?;
    trace!(x = offset.x, y = offset.y, zoom, "position error");

    if !offset.is_zero() {
        warp_image(image, &offset.projection())?;
    }
    if zoom <= 0.0 {
        // the frame shrinks to a point
        return fill_black(image);
    }
    if zoom != 1.0 {
        warp_image(image, &zoom_projection(zoom, width, height))?;
    }
    Ok(())
}
