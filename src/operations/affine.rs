//! Affine resampling shared by the position error and motion ghost augmentations.

use image::{DynamicImage, ImageBuffer, Pixel, Primitive};
use imageproc::{
    definitions::Clamp,
    geometric_transformations::{warp, Interpolation, Projection},
};
use rand::Rng;

use crate::{buffer::with_buffer, error::AugmentError, sampling::ParamRange};

/// A translation in pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Offset {
    pub x: f32,
    pub y: f32,
}

impl Offset {
    /// Draws x, then y, each a fraction of the frame size within `[-shift, shift]`.
    pub fn sample<R: Rng + ?Sized>(
        shift: f32,
        width: u32,
        height: u32,
        rng: &mut R,
    ) -> Result<Self, AugmentError> {
        let range = ParamRange::symmetric(shift);
        let x = range.sample("shift", rng)? * width as f32;
        let y = range.sample("shift", rng)? * height as f32;
        Ok(Offset { x, y })
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    pub fn projection(&self) -> Projection {
        Projection::translate(self.x, self.y)
    }
}

/// Zooms by `factor` about the centre of a `width`x`height` frame.
pub fn zoom_projection(factor: f32, width: u32, height: u32) -> Projection {
    let centre_x = (width as f32 - 1.0) / 2.0;
    let centre_y = (height as f32 - 1.0) / 2.0;
    Projection::translate(-centre_x, -centre_y)
        .and_then(Projection::scale(factor, factor))
        .and_then(Projection::translate(centre_x, centre_y))
}

/// Resamples the image in place. Areas mapped from outside the frame become black.
pub fn warp_image(image: &mut DynamicImage, projection: &Projection) -> Result<(), AugmentError> {
    with_buffer!(image, |buffer| *buffer = warp_buffer(buffer, projection))
}

/// Blacks out the whole frame, keeping its dimensions.
pub fn fill_black(image: &mut DynamicImage) -> Result<(), AugmentError> {
    with_buffer!(image, |buffer| buffer
        .pixels_mut()
        .for_each(|pixel| *pixel = black_pixel()))
}

pub(crate) fn warp_buffer<P>(
    buffer: &ImageBuffer<P, Vec<P::Subpixel>>,
    projection: &Projection,
) -> ImageBuffer<P, Vec<P::Subpixel>>
where
    P: 'static + Pixel + Send + Sync,
    P::Subpixel: Send + Sync + Into<f32> + Clamp<f32>,
{
    warp(buffer, projection, Interpolation::Bilinear, black_pixel::<P>())
}

fn black_pixel<P: Pixel>() -> P {
    let subpixels = vec![P::Subpixel::DEFAULT_MIN_VALUE; P::CHANNEL_COUNT as usize];
    *P::from_slice(&subpixels)
}
