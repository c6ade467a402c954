//! Logging setup for the demo binary.

use tracing_subscriber::EnvFilter;

use crate::error::LibraryError;

/// Filter applied when `RUST_LOG` is unset or invalid
const DEFAULT_FILTER: &str = "info";

/// Install a `tracing` fmt subscriber writing to stderr.
///
/// The filter comes from `RUST_LOG`, falling back to `info`.
///
/// # Errors
///
/// Returns a `LibraryError::Telemetry` if a global subscriber is already set
pub fn setup_tracing() -> Result<(), LibraryError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| LibraryError::Telemetry(e.to_string()))
}
