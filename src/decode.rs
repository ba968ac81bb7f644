use std::path::Path;

use image::{DynamicImage, ImageReader};
use tracing::info;

use crate::{batch::Batch, error::AugmentError, wa_err};

/// Guesses the format based on file contents.
pub fn decode(file: &Path) -> Result<DynamicImage, AugmentError> {
    let image = ImageReader::open(file)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| wa_err!("unable to open image `{}': {e}", file.display()))?
        .decode()
        .map_err(|e| wa_err!("unable to decode image `{}': {e}", file.display()))?;
    info!(
        file = %file.display(),
        width = image.width(),
        height = image.height(),
        "decoded"
    );
    Ok(image)
}

/// Decodes every file, in order, into a single batch
pub fn decode_batch(files: &[impl AsRef<Path>]) -> Result<Batch, AugmentError> {
    files.iter().map(|file| decode(file.as_ref())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file() {
        let err = decode(Path::new("this/file/does/not/exist.png")).unwrap_err();
        assert!(err.to_string().contains("unable to open image"));
    }

    #[test]
    fn test_empty_batch() {
        let files: [&Path; 0] = [];
        assert!(decode_batch(&files).unwrap().is_empty());
    }
}
