//! Log subscriber bootstrap.

use tracing_subscriber::EnvFilter;

use crate::error::{Result, RuntimeError};

/// Installs a stderr fmt subscriber.
///
/// `RUST_LOG` wins over `filter`; an empty `filter` means `info`. Fails if a
/// global subscriber is already set.
pub fn try_init(filter: &str) -> Result<()> {
    let directives = if filter.trim().is_empty() {
        "info"
    } else {
        filter
    };
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(directives))
        .map_err(|err| RuntimeError::Logging(err.to_string()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| RuntimeError::Logging(err.to_string()))
}
