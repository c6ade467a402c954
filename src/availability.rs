use std::fmt;

use serde::{Deserialize, Serialize};

/// Whether a book can currently be lent out
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Availability {
    /// Book is on the shelf and can be lent
    Available,
    /// Book cannot be lent until it is returned
    ///
    /// Freshly constructed books start here.
    #[default]
    Unavailable,
}

impl Availability {
    /// Returns `true` for [`Availability::Available`]
    #[must_use]
    pub fn is_available(self) -> bool {
        matches!(self, Self::Available)
    }

    /// Get a human-readable description of the current state
    #[must_use]
    pub fn get_description(&self) -> String {
        match self {
            Self::Available => "Book is available for lending".to_string(),
            Self::Unavailable => "Book is not currently available".to_string(),
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available => f.write_str("available"),
            Self::Unavailable => f.write_str("unavailable"),
        }
    }
}
