use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing::Level;

use crate::error::{ProcessingError, Result};

/// Install the global `tracing` subscriber.
///
/// Logs go to stderr so report and JSON output on stdout stay clean, or to
/// `log_file` without ANSI colors.
pub fn init_logging(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_max_level(max_level(verbose))
        .with_target(false);

    let installed = match log_file {
        Some(path) => {
            let file = File::create(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None => builder.with_writer(std::io::stderr).try_init(),
    };

    installed.map_err(|e| ProcessingError::Config(format!("Failed to initialise logging: {}", e)))
}

/// INFO by default, DEBUG with `--verbose`.
pub fn max_level(verbose: bool) -> Level {
    if verbose {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level_shows_row_counts() {
        assert_eq!(max_level(false), Level::INFO);
    }

    #[test]
    fn test_verbose_raises_to_debug() {
        assert_eq!(max_level(true), Level::DEBUG);
    }
}
