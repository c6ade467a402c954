//! JSON views of in-memory book state, for status output.

use serde::Serialize;

use crate::error::LibraryError;

/// Render a value as pretty-printed JSON
pub trait JsonExport: Serialize {
    /// Serialize `self` to a pretty-printed JSON string
    ///
    /// # Errors
    ///
    /// Returns a `LibraryError::Serialization` if `serde_json` rejects the
    /// value
    fn to_json(&self) -> Result<String, LibraryError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl<T: Serialize + ?Sized> JsonExport for T {}
