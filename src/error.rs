use std::fmt;

/// Errors raised outside the lending state machine.
///
/// Lending itself never fails with an error: a refused lend is a `false`.
#[derive(Debug)]
pub enum LibraryError {
    /// A value could not be rendered as JSON
    Serialization(String),
    /// The logging subscriber could not be installed
    Telemetry(String),
}

impl std::error::Error for LibraryError {}

impl fmt::Display for LibraryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Serialization(msg) => write!(f, "Serialization error: {msg}"),
            Self::Telemetry(msg) => write!(f, "Telemetry error: {msg}"),
        }
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
