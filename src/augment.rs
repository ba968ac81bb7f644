//! One function per simulated defect, each taking a batch and returning the augmented batch.
//!
//! These are shorthands for building the matching [`Augmenter`] and calling [`Augmenter::apply`].
//! Randomness comes only from `rng`, so a seeded generator gives reproducible results.

use rand::Rng;

use crate::{
    batch::Batch,
    error::AugmentError,
    operations::{Artifact, Augmenter, Exposure, Focus, MotionBlur, MotionGhost, PositionError},
};

/// Position errors that lead to anatomy cutoff.
///
/// Shifts each image by up to `shift` of its width and height, then zooms by a factor
/// between `min_scale` and `max_scale`.
pub fn position_error<R: Rng + ?Sized>(
    batch: Batch,
    min_scale: f32,
    max_scale: f32,
    shift: f32,
    rng: &mut R,
) -> Result<Batch, AugmentError> {
    Augmenter::PositionError(PositionError::new(min_scale, max_scale, shift)).apply(batch, rng)
}

/// Artifacts that occlude parts of the image.
///
/// Between `min_drop` and `max_drop` of each image is zeroed out in coarse patches.
/// Smaller `size` values make bigger patches.
pub fn artifact_error<R: Rng + ?Sized>(
    batch: Batch,
    min_drop: f32,
    max_drop: f32,
    size: f32,
    rng: &mut R,
) -> Result<Batch, AugmentError> {
    Augmenter::Artifact(Artifact::new(min_drop, max_drop, size)).apply(batch, rng)
}

/// Motion blur. Higher `blur_amount` means more blur.
pub fn motion_blur<R: Rng + ?Sized>(
    batch: Batch,
    blur_amount: u32,
    rng: &mut R,
) -> Result<Batch, AugmentError> {
    Augmenter::MotionBlur(MotionBlur::new(blur_amount)).apply(batch, rng)
}

/// A ghost image from lateral motion.
///
/// A copy shifted by up to `shift` of the frame is mixed in with a weight
/// between `min_alpha` and `max_alpha`.
pub fn motion_ghost<R: Rng + ?Sized>(
    batch: Batch,
    min_alpha: f32,
    max_alpha: f32,
    shift: f32,
    rng: &mut R,
) -> Result<Batch, AugmentError> {
    Augmenter::MotionGhost(MotionGhost::new(min_alpha, max_alpha, shift)).apply(batch, rng)
}

/// Changes the exposure of the image.
/// Exposures greater than 1 overexpose, exposures less than 1 underexpose.
pub fn machine_expose<R: Rng + ?Sized>(
    batch: Batch,
    min_expose: f32,
    max_expose: f32,
    rng: &mut R,
) -> Result<Batch, AugmentError> {
    Augmenter::Exposure(Exposure::new(min_expose, max_expose)).apply(batch, rng)
}

/// An out of focus image: Gaussian blur with a standard deviation between `mean` and `sigma`.
/// A `mean` and `sigma` of 0 means no blur.
pub fn machine_focus<R: Rng + ?Sized>(
    batch: Batch,
    mean: f32,
    sigma: f32,
    rng: &mut R,
) -> Result<Batch, AugmentError> {
    Augmenter::Focus(Focus::new(mean, sigma)).apply(batch, rng)
}
