//! Command-line argument parsing.
//!
//! Options follow imagemagick's convention of a single leading `-`,
//! which is why this is hand-rolled instead of using an argument parsing library.

use std::ffi::{OsStr, OsString};

use strum::{EnumString, IntoStaticStr, VariantArray};

use crate::{error::AugmentError, plan::ExecutionPlan, wa_err};

#[derive(EnumString, IntoStaticStr, VariantArray, Debug, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "kebab-case")]
pub enum Arg {
    PositionError,
    Artifact,
    MotionBlur,
    MotionGhost,
    Exposure,
    Focus,
    Seed,
}

impl Arg {
    pub fn value_syntax(&self) -> &'static str {
        match self {
            Arg::PositionError => "min,max,shift",
            Arg::Artifact => "min,max,size",
            Arg::MotionBlur => "kernel",
            Arg::MotionGhost => "min,max,shift",
            Arg::Exposure => "min,max",
            Arg::Focus => "mean,sigma",
            Arg::Seed => "value",
        }
    }

    pub fn help_text(&self) -> &'static str {
        match self {
            Arg::PositionError => "shift and zoom the image within the frame",
            Arg::Artifact => "zero out coarse patches of the image",
            Arg::MotionBlur => "blur along a line of the given kernel size",
            Arg::MotionGhost => "blend in a shifted copy of the image",
            Arg::Exposure => "multiply pixel values by a random factor",
            Arg::Focus => "Gaussian blur with a random standard deviation",
            Arg::Seed => "seed the random number generator",
        }
    }
}

/// Every input file becomes part of one batch.
/// The augmentations apply to the whole batch in the order they are listed.
pub fn parse_args(mut args: Vec<OsString>) -> Result<ExecutionPlan, AugmentError> {
    // maybe_print_help should take care of it, but this won't hurt
    if args.len() <= 1 {
        return Err(wa_err!("No command-line arguments provided"));
    }

    // like imagemagick, determine the output filename first
    let output_filename = args
        .pop()
        .ok_or_else(|| wa_err!("No command-line arguments provided"))?;
    if starts_with_sign(&output_filename) {
        return Err(wa_err!(
            "missing an image filename `{}'",
            output_filename.to_string_lossy()
        ));
    }

    let mut plan = ExecutionPlan::default();
    plan.set_output_file(output_filename.into());

    let mut iter = args.into_iter().skip(1); // skip argv[0], path to our binary
    while let Some(raw_arg) = iter.next() {
        if starts_with_sign(&raw_arg) {
            let arg_name = arg_name(raw_arg)?;
            let arg = Arg::try_from(arg_name.as_str())
                .map_err(|_| wa_err!("unrecognized option `{}'", arg_name))?;
            let value = iter
                .next()
                .ok_or_else(|| wa_err!("argument requires a value: {}", arg_name))?;
            plan.apply_arg(arg, &value)?;
        } else {
            plan.add_input_file(raw_arg.into());
        }
    }
    if plan.input_files().is_empty() {
        return Err(wa_err!("no images defined")); // mimics imagemagick
    }
    Ok(plan)
}

/// Checks if the string starts with a `-` or a `+`
fn starts_with_sign(arg: &OsStr) -> bool {
    let bytes = arg.as_encoded_bytes();
    let first_byte = bytes.first();
    (first_byte == Some(&b'-') || first_byte == Some(&b'+'))
        // Anything starting with two dashes instead of one is treated as filename
        && bytes.get(1) != Some(&b'-')
}

/// Strips the sign from an option
fn arg_name(raw_arg: OsString) -> Result<String, AugmentError> {
    let mut string = raw_arg
        .into_string()
        .map_err(|s| wa_err!("unrecognized option `{}'", s.to_string_lossy()))?;
    string.remove(0);
    Ok(string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::{Augmenter, Exposure, MotionBlur};
    use std::path::PathBuf;

    fn args(list: &[&str]) -> Vec<OsString> {
        list.iter().map(OsString::from).collect()
    }

    #[test]
    fn test_arg_names() {
        assert_eq!(Arg::try_from("position-error"), Ok(Arg::PositionError));
        assert_eq!(Arg::try_from("motion-ghost"), Ok(Arg::MotionGhost));
        let name: &'static str = Arg::MotionBlur.into();
        assert_eq!(name, "motion-blur");
        assert!(Arg::try_from("resize").is_err());
    }

    #[test]
    fn test_parse_args() {
        let plan = parse_args(args(&[
            "wa-convert",
            "a.png",
            "-exposure",
            "0.5,1.5",
            "b.png",
            "-motion-blur",
            "9",
            "-seed",
            "7",
            "out.png",
        ]))
        .unwrap();
        assert_eq!(
            plan.input_files(),
            &[PathBuf::from("a.png"), PathBuf::from("b.png")]
        );
        assert_eq!(plan.seed(), Some(7));
        assert_eq!(
            plan.augmenter(),
            Augmenter::Sequence(vec![
                Augmenter::Exposure(Exposure::new(0.5, 1.5)),
                Augmenter::MotionBlur(MotionBlur::new(9)),
            ])
        );
    }

    #[test]
    fn test_errors() {
        let message = |list: &[&str]| parse_args(args(list)).unwrap_err().to_string();

        assert!(message(&["wa-convert"]).contains("No command-line arguments provided"));
        assert!(message(&["wa-convert", "a.png", "-focus"]).contains("missing an image filename"));
        assert!(message(&["wa-convert", "-focus", "0,1", "out.png"]).contains("no images defined"));
        assert!(message(&["wa-convert", "a.png", "-sharpen", "1", "out.png"])
            .contains("unrecognized option `sharpen'"));
        assert!(message(&["wa-convert", "a.png", "-focus", "out.png"])
            .contains("argument requires a value: focus"));
        assert!(message(&["wa-convert", "a.png", "-exposure", "x,1", "out.png"])
            .contains("invalid argument for option `exposure': x,1"));
    }

    #[test]
    fn test_double_dash_is_a_filename() {
        assert!(!starts_with_sign(OsStr::new("--weird.png")));
        assert!(starts_with_sign(OsStr::new("-focus")));
        assert!(starts_with_sign(OsStr::new("+focus")));
        assert!(!starts_with_sign(OsStr::new("plain.png")));
    }
}
