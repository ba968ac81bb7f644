//! Exposure changes: pixel intensities are scaled by a common factor.

use image::{DynamicImage, ImageBuffer, Pixel};
use rand::Rng;
use tracing::trace;

use crate::{
    buffer::{with_buffer, Sample},
    error::AugmentError,
    sampling::ParamRange,
};

/// Factors greater than 1 overexpose, factors less than 1 underexpose.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Exposure {
    pub factor: ParamRange,
}

impl Exposure {
    pub fn new(min_expose: f32, max_expose: f32) -> Self {
        Exposure {
            factor: ParamRange::new(min_expose, max_expose),
        }
    }
}

/// Multiplies every colour subpixel by one factor per image.
/// Integer results are rounded, and all results are clamped to the valid range of the pixel type.
/// Alpha is left alone.
pub fn exposure<R: Rng + ?Sized>(
    image: &mut DynamicImage,
    params: &Exposure,
    rng: &mut R,
) -> Result<(), AugmentError> {
    let factor = params.factor.sample("expose", rng)?;
    trace!(factor, "exposure");
    if factor == 1.0 {
        return Ok(());
    }
    with_buffer!(image, |buffer| multiply(buffer, factor))
}

fn multiply<P>(buffer: &mut ImageBuffer<P, Vec<P::Subpixel>>, factor: f32)
where
    P: Pixel,
    P::Subpixel: Sample,
{
    for pixel in buffer.pixels_mut() {
        pixel.apply_without_alpha(|value| P::Subpixel::from_f32(value.to_f32() * factor));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Luma, LumaA, Rgb, RgbImage};
    use rand::{rngs::StdRng, SeedableRng};

    fn grey(value: u8) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(100, 100, Rgb([value; 3])))
    }

    #[test]
    fn test_overexposure_clamps() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut image = grey(128);
        exposure(&mut image, &Exposure::new(2.0, 2.0), &mut rng).unwrap();
        assert!(image.to_rgb8().pixels().all(|p| p.0 == [255, 255, 255]));
    }

    #[test]
    fn test_underexposure_rounds() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut image = grey(101);
        exposure(&mut image, &Exposure::new(0.5, 0.5), &mut rng).unwrap();
        // 50.5 rounds away from zero
        assert!(image.to_rgb8().pixels().all(|p| p.0 == [51, 51, 51]));
    }

    #[test]
    fn test_unit_factor_is_identity() {
        let mut rng = StdRng::seed_from_u64(0);
        let original = DynamicImage::ImageRgb8(RgbImage::from_fn(20, 20, |x, y| {
            Rgb([x as u8, y as u8, (x * y) as u8])
        }));
        let mut image = original.clone();
        exposure(&mut image, &Exposure::new(1.0, 1.0), &mut rng).unwrap();
        assert_eq!(image, original);
    }

    #[test]
    fn test_alpha_is_kept() {
        let mut rng = StdRng::seed_from_u64(0);
        let buffer: ImageBuffer<LumaA<u16>, Vec<u16>> =
            ImageBuffer::from_pixel(4, 4, LumaA([1000, 40000]));
        let mut image = DynamicImage::ImageLumaA16(buffer);
        exposure(&mut image, &Exposure::new(3.0, 3.0), &mut rng).unwrap();
        assert!(image.to_luma_alpha16().pixels().all(|p| p.0 == [3000, 40000]));
    }

    #[test]
    fn test_factor_range_is_respected() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let buffer: ImageBuffer<Luma<u16>, Vec<u16>> =
                ImageBuffer::from_pixel(2, 2, Luma([1000]));
            let mut image = DynamicImage::ImageLuma16(buffer);
            exposure(&mut image, &Exposure::new(0.5, 1.5), &mut rng).unwrap();
            let value = image.to_luma16().get_pixel(0, 0).0[0];
            assert!((500..=1500).contains(&value), "{value}");
        }
    }
}
