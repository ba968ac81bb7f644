//! Occlusion artifacts: coarse rectangular regions of the image are zeroed out.

use image::{
    imageops::{resize, FilterType},
    DynamicImage, GrayImage, ImageBuffer, Luma, Pixel, Primitive,
};
use rand::Rng;
use tracing::trace;

use crate::{
    buffer::{with_buffer, Sample},
    error::AugmentError,
    sampling::{unit_interval, ParamRange},
};

/// Lower bound on the number of dropout cells along each axis
const MIN_GRID_CELLS: u32 = 3;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Artifact {
    /// Fraction of the image to remove, 0 to 1
    pub drop: ParamRange,
    /// Resolution of the dropout grid relative to the image.
    /// Smaller values produce bigger artifacts.
    pub size: f32,
}

impl Artifact {
    pub fn new(min_drop: f32, max_drop: f32, size: f32) -> Self {
        Artifact {
            drop: ParamRange::new(min_drop, max_drop),
            size,
        }
    }
}

pub fn artifact<R: Rng + ?Sized>(
    image: &mut DynamicImage,
    params: &Artifact,
    rng: &mut R,
) -> Result<(), AugmentError> {
    let probability = unit_interval("drop", params.drop.sample("drop", rng)?)?;
    if !(params.size > 0.0 && params.size.is_finite()) {
        return Err(AugmentError::InvalidParameter {
            name: "size",
            value: params.size,
        });
    }
    trace!(probability, "artifact");
    if probability == 0.0 {
        return Ok(());
    }

    let mask = DropoutMask::sample(image.width(), image.height(), params.size, probability, rng);
    with_buffer!(image, |buffer| apply_mask(buffer, &mask))
}

/// A low resolution grid of dropped cells, stretched over the image with nearest-neighbour sampling.
struct DropoutMask {
    mask: GrayImage,
}

impl DropoutMask {
    fn sample<R: Rng + ?Sized>(
        width: u32,
        height: u32,
        size: f32,
        probability: f32,
        rng: &mut R,
    ) -> Self {
        let columns = grid_cells(width, size);
        let rows = grid_cells(height, size);
        // drawn row by row
        let cells = GrayImage::from_fn(columns, rows, |_, _| {
            if rng.gen_bool(f64::from(probability)) {
                Luma([u8::MAX])
            } else {
                Luma([0])
            }
        });
        DropoutMask {
            mask: resize(&cells, width, height, FilterType::Nearest),
        }
    }

    fn is_dropped(&self, x: u32, y: u32) -> bool {
        self.mask.get_pixel(x, y).0[0] > 127
    }
}

fn grid_cells(extent: u32, size: f32) -> u32 {
    let cells = (extent as f32 * size) as u32;
    cells.max(MIN_GRID_CELLS).min(extent)
}

fn apply_mask<P>(buffer: &mut ImageBuffer<P, Vec<P::Subpixel>>, mask: &DropoutMask)
where
    P: Pixel,
    P::Subpixel: Sample,
{
    for (x, y, pixel) in buffer.enumerate_pixels_mut() {
        if mask.is_dropped(x, y) {
            pixel.apply_without_alpha(|_| P::Subpixel::DEFAULT_MIN_VALUE);
        }
    }
}
