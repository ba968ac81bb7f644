use std::{ffi::OsStr, str::FromStr};

use crate::arg_parse_err::ArgParseErr;

/// Strips leading and trailing whitespace from an input string slice
/// and attempts to parse the remaining string into a specified numeric type `T`.
///
/// # Type Parameters
///
/// * `T`: The target numeric type. This type must implement `std::str::FromStr`.
pub fn strip_and_parse_number<T>(input: &str) -> Result<T, T::Err>
where
    T: FromStr,
    T::Err: std::error::Error,
{
    input.trim().parse::<T>()
}

/// Parses a whole option value as a single number.
pub fn parse_numeric_arg<T>(value: &OsStr) -> Result<T, ArgParseErr>
where
    T: FromStr,
    T::Err: std::error::Error,
    ArgParseErr: From<T::Err>,
{
    let string = value.to_str().ok_or_else(ArgParseErr::new)?;
    Ok(strip_and_parse_number::<T>(string)?)
}

/// Parses exactly `N` comma-separated finite numbers, e.g. `0.9,1.2,0.1`.
pub fn parse_number_list<const N: usize>(value: &OsStr) -> Result<[f32; N], ArgParseErr> {
    let string = value.to_str().ok_or_else(ArgParseErr::new)?;
    let parts: Vec<&str> = string.split(',').collect();
    if parts.len() != N {
        return Err(ArgParseErr::with_msg(format!(
            "expected {N} comma-separated numbers, got `{string}'"
        )));
    }

    let mut numbers = [0.0; N];
    for (number, part) in numbers.iter_mut().zip(parts) {
        let parsed: f32 = strip_and_parse_number(part)?;
        if !parsed.is_finite() {
            return Err(ArgParseErr::new());
        }
        *number = parsed;
    }
    Ok(numbers)
}
