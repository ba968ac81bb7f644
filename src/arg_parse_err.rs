use std::{
    ffi::OsStr,
    num::{ParseFloatError, ParseIntError},
};

/// Error reporting for argument parsing that mimics imagemagick.
/// Use `.display_with_arg()` to properly present this error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArgParseErr {
    pub message: Option<String>,
}

impl ArgParseErr {
    pub fn display_with_arg(&self, arg_name: &str, value: &OsStr) -> String {
        let value = value.to_string_lossy();
        // if there is a specific message, show it to the user,
        // otherwise simply echo the value the user has passed
        let message = if let Some(msg) = &self.message {
            msg.as_str()
        } else {
            &value
        };

        format!("invalid argument for option `{arg_name}': {message}")
    }

    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_msg(str: impl ToString) -> Self {
        Self {
            message: Some(str.to_string()),
        }
    }
}

impl From<ParseFloatError> for ArgParseErr {
    fn from(_value: ParseFloatError) -> Self {
        Self::new()
    }
}

impl From<ParseIntError> for ArgParseErr {
    fn from(_value: ParseIntError) -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::ArgParseErr;
    use std::ffi::OsStr;

    #[test]
    fn test_echoes_value_without_message() {
        let err = ArgParseErr::new();
        assert_eq!(
            err.display_with_arg("focus", OsStr::new("1,x")),
            "invalid argument for option `focus': 1,x"
        );
    }

    #[test]
    fn test_prefers_message() {
        let err = ArgParseErr::with_msg("expected 2 comma-separated numbers");
        assert_eq!(
            err.display_with_arg("exposure", OsStr::new("1")),
            "invalid argument for option `exposure': expected 2 comma-separated numbers"
        );
    }
}
