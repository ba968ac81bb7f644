use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use image::{DynamicImage, ImageFormat};
use tracing::info;

use crate::{error::AugmentError, wa_err, wa_try};

/// Writes the image in the format implied by the file extension.
pub fn encode(image: &DynamicImage, file: &Path) -> Result<(), AugmentError> {
    let format = ImageFormat::from_path(file)
        .map_err(|_| wa_err!("no encode delegate for this image format `{}'", file.display()))?;

    let mut writer = BufWriter::new(wa_try!(File::create(file)));
    image.write_to(&mut writer, format)?;
    writer.flush()?;

    info!(file = %file.display(), ?format, "encoded");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;

    #[test]
    fn test_unknown_extension() {
        let image = DynamicImage::ImageRgb8(RgbImage::new(2, 2));
        let err = encode(&image, Path::new("out.not-a-format")).unwrap_err();
        assert!(err.to_string().contains("no encode delegate"));
    }
}
