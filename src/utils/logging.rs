//! Log subscriber setup shared by the binaries.

use tracing_subscriber::EnvFilter;

use crate::core::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};

/// Filter from `ANGLER_LOG`, or `info` when unset or unparsable.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Installs the stderr subscriber. Stdout is left for command output.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_twice_does_not_panic() {
        init_logging();
        init_logging();
        tracing::info!("logging initialized");
    }

    #[test]
    fn test_env_filter_builds() {
        let filter = env_filter();
        assert!(!filter.to_string().is_empty());
    }
}
