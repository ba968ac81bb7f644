//! Helper functions for using `quickcheck`'s `Arbitrary` trait

use image::{DynamicImage, ImageBuffer, Luma, Rgb, Rgba};
use quickcheck::{Arbitrary, Gen};

use crate::{
    batch::Batch,
    operations::{Artifact, Augmenter, Exposure, Focus, MotionBlur, MotionGhost, PositionError},
};

#[must_use]
pub fn unit_float(gen: &mut Gen) -> f32 {
    f32::from(u16::arbitrary(gen)) / f32::from(u16::MAX)
}

/// An ordered pair of floats within `[0, 1]`
#[must_use]
pub fn unit_range(gen: &mut Gen) -> (f32, f32) {
    let a = unit_float(gen);
    let b = unit_float(gen);
    (a.min(b), a.max(b))
}

/// An augmenter with parameters that are valid, but otherwise arbitrary
#[derive(Debug, Clone)]
pub struct ArbitraryAugmenter(pub Augmenter);

impl Arbitrary for ArbitraryAugmenter {
    fn arbitrary(gen: &mut Gen) -> Self {
        ArbitraryAugmenter(augmenter(gen, 2))
    }
}

fn augmenter(gen: &mut Gen, nesting: u8) -> Augmenter {
    let variants = if nesting > 0 { 7 } else { 6 };
    let (low, high) = unit_range(gen);
    match u8::arbitrary(gen) % variants {
        0 => Augmenter::PositionError(PositionError::new(
            0.5 + low,
            0.5 + high,
            unit_float(gen) * 0.5,
        )),
        1 => Augmenter::Artifact(Artifact::new(low, high, 0.01 + unit_float(gen))),
        2 => Augmenter::MotionBlur(MotionBlur::new(u32::from(u8::arbitrary(gen) % 12))),
        3 => Augmenter::MotionGhost(MotionGhost::new(low, high, unit_float(gen) * 0.5)),
        4 => Augmenter::Exposure(Exposure::new(low * 3.0, high * 3.0)),
        5 => Augmenter::Focus(Focus::new(low * 3.0, high * 3.0)),
        _ => {
            let count = usize::from(u8::arbitrary(gen) % 3);
            let children = (0..count).map(|_| augmenter(gen, nesting - 1)).collect();
            Augmenter::Sequence(children)
        }
    }
}

/// A few small images of mixed pixel layouts, including empty ones
#[derive(Debug, Clone)]
pub struct ArbitraryBatch(pub Batch);

impl Arbitrary for ArbitraryBatch {
    fn arbitrary(gen: &mut Gen) -> Self {
        let count = u8::arbitrary(gen) % 4;
        ArbitraryBatch((0..count).map(|_| image(gen)).collect())
    }
}

fn image(gen: &mut Gen) -> DynamicImage {
    let width = u32::from(u8::arbitrary(gen) % 13);
    let height = u32::from(u8::arbitrary(gen) % 13);
    match u8::arbitrary(gen) % 5 {
        0 => DynamicImage::ImageLuma8(ImageBuffer::from_fn(width, height, |_, _| {
            Luma([u8::arbitrary(gen)])
        })),
        1 => DynamicImage::ImageRgb8(ImageBuffer::from_fn(width, height, |_, _| {
            Rgb([u8::arbitrary(gen), u8::arbitrary(gen), u8::arbitrary(gen)])
        })),
        2 => DynamicImage::ImageRgba8(ImageBuffer::from_fn(width, height, |_, _| {
            Rgba([
                u8::arbitrary(gen),
                u8::arbitrary(gen),
                u8::arbitrary(gen),
                u8::arbitrary(gen),
            ])
        })),
        3 => DynamicImage::ImageRgb16(ImageBuffer::from_fn(width, height, |_, _| {
            Rgb([u16::arbitrary(gen), u16::arbitrary(gen), u16::arbitrary(gen)])
        })),
        _ => DynamicImage::ImageRgba32F(ImageBuffer::from_fn(width, height, |_, _| {
            Rgba([unit_float(gen), unit_float(gen), unit_float(gen), 1.0])
        })),
    }
}
