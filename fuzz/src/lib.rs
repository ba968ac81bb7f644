use std::num::NonZeroU8;

use arbitrary::{Arbitrary, Unstructured};
use image::{DynamicImage, ImageBuffer};
use wonderaugment::operations::{
    Artifact, Augmenter, Exposure, Focus, MotionBlur, MotionGhost, PositionError,
};

#[derive(Debug)]
pub struct StructuredImage {
    width: NonZeroU8,
    height: NonZeroU8,
    rgb_data: Vec<u8>,
}

impl StructuredImage {
    pub fn to_image(&self) -> DynamicImage {
        let width = self.width.get() as u32;
        DynamicImage::ImageRgb8(ImageBuffer::from_fn(
            width,
            self.height.get() as u32,
            |x, y| {
                let idx = (y * width + x) as usize * 3;
                image::Rgb([
                    self.rgb_data[idx],
                    self.rgb_data[idx + 1],
                    self.rgb_data[idx + 2],
                ])
            },
        ))
    }
}

impl<'a> Arbitrary<'a> for StructuredImage {
    fn arbitrary(unstructured: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let width: NonZeroU8 = unstructured.arbitrary()?;
        let height: NonZeroU8 = unstructured.arbitrary()?;
        let rgb_data_len = width.get() as usize * height.get() as usize * 3;
        let rgb_data = unstructured.bytes(rgb_data_len)?;

        Ok(Self {
            width,
            height,
            rgb_data: rgb_data.to_vec(),
        })
    }
}

/// An augmenter with parameters in their valid ranges
#[derive(Debug)]
pub struct StructuredAugmenter(pub Augmenter);

/// An ordered pair within `[0, scale]`
fn range(unstructured: &mut Unstructured, scale: f32) -> arbitrary::Result<(f32, f32)> {
    let a = unit(unstructured)? * scale;
    let b = unit(unstructured)? * scale;
    Ok((a.min(b), a.max(b)))
}

fn unit(unstructured: &mut Unstructured) -> arbitrary::Result<f32> {
    Ok(f32::from(u8::arbitrary(unstructured)?) / 255.0)
}

impl<'a> Arbitrary<'a> for StructuredAugmenter {
    fn arbitrary(unstructured: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let augmenter = match unstructured.int_in_range(0..=5)? {
            0 => {
                let (min, max) = range(unstructured, 2.0)?;
                Augmenter::PositionError(PositionError::new(min, max, unit(unstructured)?))
            }
            1 => {
                let (min, max) = range(unstructured, 1.0)?;
                let size = unit(unstructured)?.max(0.01);
                Augmenter::Artifact(Artifact::new(min, max, size))
            }
            2 => Augmenter::MotionBlur(MotionBlur::new(unstructured.int_in_range(0..=31)?)),
            3 => {
                let (min, max) = range(unstructured, 1.0)?;
                Augmenter::MotionGhost(MotionGhost::new(min, max, unit(unstructured)?))
            }
            4 => {
                let (min, max) = range(unstructured, 4.0)?;
                Augmenter::Exposure(Exposure::new(min, max))
            }
            _ => {
                let (min, max) = range(unstructured, 8.0)?;
                Augmenter::Focus(Focus::new(min, max))
            }
        };
        Ok(Self(augmenter))
    }
}
