//! Motion blur: each image is convolved with a straight line kernel.

use image::{DynamicImage, ImageBuffer, Pixel};
use imageproc::filter::Kernel;
use rand::Rng;
use tracing::trace;

use crate::{
    buffer::{with_buffer, Sample},
    error::AugmentError,
    sampling::ParamRange,
};

/// Kernels smaller than this leave the image unchanged
pub const MIN_KERNEL_SIZE: u32 = 3;

/// The motion direction is drawn from `[-MAX_ANGLE, MAX_ANGLE]` degrees
pub const MAX_ANGLE: f32 = 45.0;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MotionBlur {
    /// Width of the kernel in pixels; higher means more blur
    pub kernel_size: u32,
    /// Direction of the motion in degrees, clockwise from vertical
    pub angle: ParamRange,
}

impl MotionBlur {
    pub fn new(kernel_size: u32) -> Self {
        MotionBlur {
            kernel_size,
            angle: ParamRange::symmetric(MAX_ANGLE),
        }
    }
}

pub fn motion_blur<R: Rng + ?Sized>(
    image: &mut DynamicImage,
    params: &MotionBlur,
    rng: &mut R,
) -> Result<(), AugmentError> {
    let angle = params.angle.sample("angle", rng)?;
    trace!(angle, kernel_size = params.kernel_size, "motion blur");
    if params.kernel_size < MIN_KERNEL_SIZE {
        return Ok(());
    }
    let kernel = LineKernel::new(params.kernel_size, angle);
    with_buffer!(image, |buffer| *buffer = convolve(buffer, &kernel))
}

/// Normalized weights of an anti-aliased line through the centre of a square kernel,
/// stored row by row. The anchor is at `size / 2` on both axes.
#[derive(Debug)]
struct LineKernel {
    size: u32,
    weights: Vec<f32>,
}

impl LineKernel {
    fn new(size: u32, degrees: f32) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        // unit vector of the motion in image coordinates, y grows downwards
        let (dir_x, dir_y) = (sin, -cos);
        let centre = (size - 1) as f32 / 2.0;

        let mut weights = Vec::with_capacity((size * size) as usize);
        for row in 0..size {
            for column in 0..size {
                let x = column as f32 - centre;
                let y = row as f32 - centre;
                let along = x * dir_x + y * dir_y;
                let across = (x * dir_y - y * dir_x).abs();
                let weight = if along.abs() > centre + 0.5 {
                    0.0
                } else {
                    (1.0 - across).max(0.0)
                };
                weights.push(weight);
            }
        }

        let total: f32 = weights.iter().sum();
        for weight in &mut weights {
            *weight /= total;
        }
        LineKernel { size, weights }
    }

    #[cfg(test)]
    fn weight(&self, column: u32, row: u32) -> f32 {
        self.weights[(row * self.size + column) as usize]
    }
}

/// Pixels outside the image take the value of the nearest edge pixel.
fn convolve<P>(
    buffer: &ImageBuffer<P, Vec<P::Subpixel>>,
    kernel: &LineKernel,
) -> ImageBuffer<P, Vec<P::Subpixel>>
where
    P: Pixel,
    P::Subpixel: Sample,
{
    Kernel::new(kernel.weights.as_slice(), kernel.size, kernel.size)
        .filter(buffer, |value: &mut P::Subpixel, sum| *value = Sample::from_f32(sum))
}
