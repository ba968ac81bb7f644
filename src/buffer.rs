//! Generic access to the pixel buffers behind a `DynamicImage`.

use image::Primitive;

/// A subpixel type the augmentations know how to do arithmetic on.
///
/// Arithmetic happens in `f32`. Converting back rounds to the nearest value for integer
/// types and clamps to the nominal range of the type: `0..=MAX` for integers, `0.0..=1.0` for floats.
pub trait Sample: Primitive + Into<f32> + Send + Sync + 'static {
    fn from_f32(value: f32) -> Self;

    fn to_f32(self) -> f32 {
        self.into()
    }
}

impl Sample for u8 {
    fn from_f32(value: f32) -> Self {
        // `as` saturates and maps NaN to 0
        value.round() as u8
    }
}

impl Sample for u16 {
    fn from_f32(value: f32) -> Self {
        value.round() as u16
    }
}

impl Sample for f32 {
    fn from_f32(value: f32) -> Self {
        if value.is_nan() {
            0.0
        } else {
            value.clamp(0.0, 1.0)
        }
    }
}

/// Runs `$body` with `$buffer` bound to a mutable reference to the concrete
/// `ImageBuffer` inside a `DynamicImage`, evaluating to `Result<_, AugmentError>`.
macro_rules! with_buffer {
    ($image:expr, |$buffer:ident| $body:expr) => {{
        use ::image::DynamicImage;
        match $image {
            DynamicImage::ImageLuma8($buffer) => Ok($body),
            DynamicImage::ImageLumaA8($buffer) => Ok($body),
            DynamicImage::ImageRgb8($buffer) => Ok($body),
            DynamicImage::ImageRgba8($buffer) => Ok($body),
            DynamicImage::ImageLuma16($buffer) => Ok($body),
            DynamicImage::ImageLumaA16($buffer) => Ok($body),
            DynamicImage::ImageRgb16($buffer) => Ok($body),
            DynamicImage::ImageRgba16($buffer) => Ok($body),
            DynamicImage::ImageRgb32F($buffer) => Ok($body),
            DynamicImage::ImageRgba32F($buffer) => Ok($body),
            other => Err($crate::error::AugmentError::UnsupportedColorType(
                other.color(),
            )),
        }
    }};
}
pub(crate) use with_buffer;

#[cfg(test)]
mod tests {
    use super::Sample;

    #[test]
    fn test_integer_rounding_and_clamping() {
        assert_eq!(u8::from_f32(127.5), 128);
        assert_eq!(u8::from_f32(127.4), 127);
        assert_eq!(u8::from_f32(256.0), 255);
        assert_eq!(u8::from_f32(-3.0), 0);
        assert_eq!(u8::from_f32(f32::NAN), 0);
        assert_eq!(u16::from_f32(70000.0), u16::MAX);
        assert_eq!(u16::from_f32(1000.6), 1001);
    }

    #[test]
    fn test_float_clamping() {
        assert_eq!(f32::from_f32(0.25), 0.25);
        assert_eq!(f32::from_f32(1.5), 1.0);
        assert_eq!(f32::from_f32(-0.5), 0.0);
        assert_eq!(f32::from_f32(f32::NAN), 0.0);
    }
}
