//! Log subscriber setup.

use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::error::{CliError, CliResult};

/// Installs a stderr `fmt` subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `level` (e.g. `info`, `debug`)
/// applies to every target. An unknown `level` is an error rather than a
/// silent subscriber.
pub fn init(level: &str) -> CliResult<()> {
    let level = parse_level(level)?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| CliError::General(format!("Failed to initialize logging: {}", e)))
}

/// Maps a case-insensitive level name to a [`Level`].
pub fn parse_level(level: &str) -> CliResult<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        other => Err(CliError::General(format!(
            "Unknown log level '{}': expected trace, debug, info, warn or error",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_levels_any_case() {
        assert_eq!(parse_level("DEBUG").unwrap(), Level::DEBUG);
        assert_eq!(parse_level("warn").unwrap(), Level::WARN);
    }

    #[test]
    fn test_unknown_level_is_rejected() {
        match parse_level("verbose") {
            Err(CliError::General(msg)) => assert!(msg.contains("verbose")),
            other => panic!("Expected rejection, got {:?}", other),
        }
    }
}
