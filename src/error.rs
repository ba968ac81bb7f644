use image::ColorType;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AugmentError {
    #[error("invalid range for `{name}': {min}..{max}")]
    InvalidRange {
        name: &'static str,
        min: f32,
        max: f32,
    },

    #[error("invalid value for `{name}': {value}")]
    InvalidParameter { name: &'static str, value: f32 },

    #[error("unsupported pixel layout: {0:?}")]
    UnsupportedColorType(ColorType),

    #[error(transparent)]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Message(String),
}

#[macro_export]
macro_rules! wa_err {
    ($($arg:tt)*) => {
        $crate::error::AugmentError::Message(format!(
            "wonderaugment: {} @ {}:{}:{}",
            format_args!($($arg)*),
            file!(),
            line!(),
            column!()
        ))
    };
}

#[macro_export]
macro_rules! wa_try {
    ($expr:expr $(,)?) => {
        match $expr {
            std::result::Result::Ok(val) => val,
            std::result::Result::Err(err) => {
                return std::result::Result::Err($crate::wa_err!("{}", err));
            }
        }
    };
}
