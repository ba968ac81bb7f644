use std::ffi::OsStr;

use current_platform::CURRENT_PLATFORM;
use strum::VariantArray;

use crate::args::Arg;

pub fn maybe_print_help_and_exit(bin_name: &str) {
    match std::env::args_os().nth(1) {
        None => print_help_and_exit(bin_name),
        Some(arg) => {
            if arg.as_os_str() == OsStr::new("--help") || arg.as_os_str() == OsStr::new("-help") {
                print_help_and_exit(bin_name)
            }
        }
    }
}

fn print_help_and_exit(bin_name: &str) -> ! {
    print_help(bin_name);
    std::process::exit(0);
}

fn print_help(bin_name: &str) {
    println!("Version: {}", version_string());
    println!("License: {}", env!("CARGO_PKG_LICENSE"));
    println!("Usage: {bin_name} [options ...] file [file ...] [options ...] output");
    println!();
    println!("All input files are augmented together as one batch.");
    println!("With several inputs the outputs are numbered: out-1.png, out-2.png, ...");
    println!();
    println!("Augmentations:");
    for arg in Arg::VARIANTS {
        let name: &'static str = arg.into();
        let option = format!("-{name} {}", arg.value_syntax());
        println!("  {option:36} {}", arg.help_text());
    }
    println!();
    println!("Set RUST_LOG=debug to log what is being done.");
}

fn version_string() -> String {
    let cpu = CURRENT_PLATFORM.split('-').next().unwrap_or("unknown");
    let version = env!("CARGO_PKG_VERSION");
    format!("WonderAugment {version} {cpu}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_string() {
        let version = version_string();
        assert!(version.starts_with("WonderAugment "));
        assert!(version.contains(env!("CARGO_PKG_VERSION")));
    }
}
