//! Parsers for the values of command-line options, e.g. `-position-error 0.9,1.2,0.1`

pub mod numbers;
mod params;

pub use numbers::{parse_number_list, parse_numeric_arg};
