//! Initialization that needs to be done on startup

use tracing_subscriber::EnvFilter;

/// Installs a subscriber that logs to stderr, filtered through `RUST_LOG`.
/// Only warnings and errors are shown by default.
///
/// Does nothing if a global subscriber is already set.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice() {
        init_logging();
        init_logging();
    }
}
