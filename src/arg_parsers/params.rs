//! Option values for each augmentation.

use std::ffi::OsStr;

use super::{parse_number_list, parse_numeric_arg};
use crate::{
    arg_parse_err::ArgParseErr,
    operations::{Artifact, Exposure, Focus, MotionBlur, MotionGhost, PositionError},
};

/// `MIN_SCALE,MAX_SCALE,SHIFT`
impl TryFrom<&OsStr> for PositionError {
    type Error = ArgParseErr;

    fn try_from(s: &OsStr) -> Result<Self, Self::Error> {
        let [min_scale, max_scale, shift] = parse_number_list(s)?;
        Ok(PositionError::new(min_scale, max_scale, shift))
    }
}

/// `MIN_DROP,MAX_DROP,SIZE`
impl TryFrom<&OsStr> for Artifact {
    type Error = ArgParseErr;

    fn try_from(s: &OsStr) -> Result<Self, Self::Error> {
        let [min_drop, max_drop, size] = parse_number_list(s)?;
        Ok(Artifact::new(min_drop, max_drop, size))
    }
}

/// `K`, the kernel size
impl TryFrom<&OsStr> for MotionBlur {
    type Error = ArgParseErr;

    fn try_from(s: &OsStr) -> Result<Self, Self::Error> {
        Ok(MotionBlur::new(parse_numeric_arg(s)?))
    }
}

/// `MIN_ALPHA,MAX_ALPHA,SHIFT`
impl TryFrom<&OsStr> for MotionGhost {
    type Error = ArgParseErr;

    fn try_from(s: &OsStr) -> Result<Self, Self::Error> {
        let [min_alpha, max_alpha, shift] = parse_number_list(s)?;
        Ok(MotionGhost::new(min_alpha, max_alpha, shift))
    }
}

/// `MIN,MAX`
impl TryFrom<&OsStr> for Exposure {
    type Error = ArgParseErr;

    fn try_from(s: &OsStr) -> Result<Self, Self::Error> {
        let [min_expose, max_expose] = parse_number_list(s)?;
        Ok(Exposure::new(min_expose, max_expose))
    }
}

/// `MEAN,SIGMA`
impl TryFrom<&OsStr> for Focus {
    type Error = ArgParseErr;

    fn try_from(s: &OsStr) -> Result<Self, Self::Error> {
        let [mean, sigma] = parse_number_list(s)?;
        Ok(Focus::new(mean, sigma))
    }
}
