use std::{ffi::OsStr, path::PathBuf};

use rand::{rngs::StdRng, SeedableRng};
use tracing::debug;

use crate::arg_parse_err::ArgParseErr;
use crate::arg_parsers::parse_numeric_arg;
use crate::args::Arg;
use crate::decode::decode_batch;
use crate::encode::encode;
use crate::error::AugmentError;
use crate::operations::{
    Artifact, Augmenter, Exposure, Focus, MotionBlur, MotionGhost, PositionError,
};
use crate::utils::filename::with_index_suffix;
use crate::wa_err;

/// Plan for the whole run: every input file is augmented as part of one batch
#[derive(Debug, Default)]
pub struct ExecutionPlan {
    /// Applied in order to every image of the batch
    ops: Vec<Augmenter>,
    input_files: Vec<PathBuf>,
    output_file: PathBuf,
    seed: Option<u64>,
}

impl ExecutionPlan {
    pub fn apply_arg(&mut self, arg: Arg, value: &OsStr) -> Result<(), AugmentError> {
        let arg_string: &'static str = arg.into();
        self.apply_arg_inner(arg, value)
            .map_err(|arg_err| wa_err!("{}", arg_err.display_with_arg(arg_string, value)))
    }

    /// Currently this can only fail due to argument parsing.
    /// Split into its own function due to lack of try{} blocks on stable Rust.
    fn apply_arg_inner(&mut self, arg: Arg, value: &OsStr) -> Result<(), ArgParseErr> {
        match arg {
            Arg::PositionError => self
                .ops
                .push(Augmenter::PositionError(PositionError::try_from(value)?)),
            Arg::Artifact => self.ops.push(Augmenter::Artifact(Artifact::try_from(value)?)),
            Arg::MotionBlur => self
                .ops
                .push(Augmenter::MotionBlur(MotionBlur::try_from(value)?)),
            Arg::MotionGhost => self
                .ops
                .push(Augmenter::MotionGhost(MotionGhost::try_from(value)?)),
            Arg::Exposure => self.ops.push(Augmenter::Exposure(Exposure::try_from(value)?)),
            Arg::Focus => self.ops.push(Augmenter::Focus(Focus::try_from(value)?)),
            Arg::Seed => self.seed = Some(parse_numeric_arg(value)?),
        };

        Ok(())
    }

    pub fn add_input_file(&mut self, file: PathBuf) {
        self.input_files.push(file);
    }

    pub fn set_output_file(&mut self, file: PathBuf) {
        self.output_file = file;
    }

    pub fn input_files(&self) -> &[PathBuf] {
        &self.input_files
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// All the requested augmentations, in the order they were given
    pub fn augmenter(&self) -> Augmenter {
        Augmenter::Sequence(self.ops.clone())
    }

    pub fn execute(&self) -> Result<(), AugmentError> {
        if self.input_files.is_empty() {
            return Err(wa_err!("no images defined")); // mimics imagemagick
        }
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        debug!(seed = self.seed, ops = self.ops.len(), "executing plan");

        let batch = decode_batch(&self.input_files)?;
        let batch = self.augmenter().apply(batch, &mut rng)?;
        for (image, output_file) in batch.iter().zip(self.output_locations()) {
            encode(image, &output_file)?;
        }
        Ok(())
    }

    fn output_locations(&self) -> Vec<PathBuf> {
        if self.input_files.len() > 1 {
            // indexing for output images starts at 1
            (1..=self.input_files.len())
                .map(|i| with_index_suffix(&self.output_file, i))
                .collect()
        } else {
            vec![self.output_file.clone(); self.input_files.len()]
        }
    }
}
