//! Simulated image-quality defects for augmenting training data.
//!
//! Every augmentation takes a [`Batch`] of images and returns a batch of the same
//! length and shape. Randomness comes only from the [`rand::Rng`] passed in,
//! so a seeded generator makes the output reproducible.
//!
//! ```no_run
//! use rand::{rngs::StdRng, SeedableRng};
//! use wonderaugment::{augment, Batch};
//!
//! let batch: Batch = vec![image::open("scan.png")?].into();
//! let mut rng = StdRng::seed_from_u64(42);
//! let batch = augment::motion_ghost(batch, 0.1, 0.4, 0.05, &mut rng)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]

#[cfg(feature = "hardened_malloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

mod arg_parse_err;
mod arg_parsers;
pub mod args;
pub mod augment;
pub mod batch;
mod buffer;
pub mod decode;
pub mod encode;
pub mod error;
pub mod help;
pub mod init;
pub mod operations;
mod plan;
pub mod sampling;
mod utils;

pub use batch::{Batch, Shape};
pub use error::AugmentError;
pub use operations::Augmenter;
pub use plan::ExecutionPlan;
