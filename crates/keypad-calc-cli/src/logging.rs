//! Tracing subscriber setup
//!
//! Log lines go to stderr so stdout stays a clean display transcript.

use crate::config::Verbosity;
use crate::error::{CliError, CliResult};
use tracing_subscriber::EnvFilter;

/// Build the filter for a verbosity level; `RUST_LOG` wins when set
#[must_use]
pub fn env_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.log_directive()))
}

/// Install the global subscriber
pub fn init(verbosity: Verbosity, json: bool) -> CliResult<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(verbosity.is_debug());

    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    result.map_err(|e| CliError::logging(e.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_env_filter_follows_verbosity() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        assert_eq!(env_filter(Verbosity::Debug).to_string(), "debug");
        assert_eq!(env_filter(Verbosity::Quiet).to_string(), "off");
    }

    #[test]
    fn test_second_init_fails() {
        // the first call may race with other tests; the second always fails
        let _ = init(Verbosity::Normal, false);
        let err = init(Verbosity::Normal, false).unwrap_err();
        assert!(matches!(err, CliError::Logging { .. }));
    }
}
