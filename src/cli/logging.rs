// Logging setup for the CLI

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is not set
pub fn default_directive(quiet: bool, verbose: bool) -> &'static str {
    if verbose {
        "mp3meta=debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    }
}

/// Install a stderr `tracing` subscriber. `RUST_LOG` overrides the flags.
pub fn init_logging(quiet: bool, verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(quiet, verbose)));

    // a second init (tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false, true), "mp3meta=debug");
        assert_eq!(default_directive(true, false), "error");
        assert_eq!(default_directive(false, false), "warn");
    }
}
