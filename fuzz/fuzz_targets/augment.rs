#![no_main]

use libfuzzer_sys::fuzz_target;
use rand::{rngs::StdRng, SeedableRng};
use wonderaugment::{operations::Augmenter, Batch};
use wonderaugment_fuzz::{StructuredAugmenter, StructuredImage};

fuzz_target!(|input: (Vec<StructuredImage>, Vec<StructuredAugmenter>, u64)| {
    let (images, augmenters, seed) = input;
    let batch: Batch = images.iter().map(StructuredImage::to_image).collect();
    let shapes = batch.shapes();

    let augmenter = Augmenter::Sequence(augmenters.into_iter().map(|a| a.0).collect());
    let output = augmenter
        .apply(batch, &mut StdRng::seed_from_u64(seed))
        .expect("valid parameters must not fail");

    assert_eq!(output.shapes(), shapes);
});
