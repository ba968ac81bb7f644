use std::ffi::OsString;

use wonderaugment::{args, error::AugmentError, help, init};

fn main() {
    let arguments: Vec<_> = std::env::args_os().collect();

    if let Err(e) = real_main(arguments) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn real_main(args: Vec<OsString>) -> Result<(), AugmentError> {
    help::maybe_print_help_and_exit("wa-convert");
    init::init_logging();
    let plan = args::parse_args(args)?;
    plan.execute()
}
