mod affine;
pub mod artifact;
pub mod exposure;
pub mod focus;
pub mod motion_blur;
pub mod motion_ghost;
pub mod position_error;

pub use artifact::Artifact;
pub use exposure::Exposure;
pub use focus::Focus;
pub use motion_blur::MotionBlur;
pub use motion_ghost::MotionGhost;
pub use position_error::PositionError;

use image::DynamicImage;
use rand::{rngs::StdRng, Rng, SeedableRng};
use rayon::prelude::*;
use strum::IntoStaticStr;
use tracing::debug;

use crate::{batch::Batch, error::AugmentError};

/// A configured image defect. Holds no state between calls.
#[derive(Debug, Clone, PartialEq, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum Augmenter {
    PositionError(PositionError),
    Artifact(Artifact),
    MotionBlur(MotionBlur),
    MotionGhost(MotionGhost),
    Exposure(Exposure),
    Focus(Focus),
    /// Applies each augmenter in turn to every image
    Sequence(Vec<Augmenter>),
}

impl Augmenter {
    /// Augments every image of the batch and returns them in the original order.
    ///
    /// One seed per image is drawn from `rng` up front, in batch order, and each image
    /// gets its own generator. The images are then processed in parallel, so the output
    /// depends only on the state of `rng` and not on scheduling.
    ///
    /// Fails as a whole if any image fails.
    pub fn apply<R: Rng + ?Sized>(
        &self,
        batch: Batch,
        rng: &mut R,
    ) -> Result<Batch, AugmentError> {
        let name: &'static str = self.into();
        debug!(augmenter = name, images = batch.len(), "augmenting batch");

        let seeds: Vec<u64> = (0..batch.len()).map(|_| rng.gen()).collect();
        let images = batch
            .into_images()
            .into_par_iter()
            .zip(seeds)
            .map(|(mut image, seed)| {
                let mut rng = StdRng::seed_from_u64(seed);
                self.execute(&mut image, &mut rng)?;
                Ok(image)
            })
            .collect::<Result<Vec<_>, AugmentError>>()?;
        Ok(Batch::new(images))
    }

    /// Augments a single image in place.
    pub fn execute<R: Rng + ?Sized>(
        &self,
        image: &mut DynamicImage,
        rng: &mut R,
    ) -> Result<(), AugmentError> {
        if image.width() == 0 || image.height() == 0 {
            return Ok(());
        }
        match self {
            Augmenter::PositionError(params) => position_error::position_error(image, params, rng),
            Augmenter::Artifact(params) => artifact::artifact(image, params, rng),
            Augmenter::MotionBlur(params) => motion_blur::motion_blur(image, params, rng),
            Augmenter::MotionGhost(params) => motion_ghost::motion_ghost(image, params, rng),
            Augmenter::Exposure(params) => exposure::exposure(image, params, rng),
            Augmenter::Focus(params) => focus::focus(image, params, rng),
            Augmenter::Sequence(augmenters) => {
                for augmenter in augmenters {
                    augmenter.execute(image, rng)?;
                }
                Ok(())
            }
        }
    }
}
