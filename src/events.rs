use serde::{Deserialize, Serialize};

use crate::availability::Availability;

/// Events that can cause an availability transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum LendingEvent {
    /// Lend the book to a borrower
    Lend,
    /// Return the book to the shelf
    Return,
}

impl Availability {
    /// Apply an event to this state.
    ///
    /// Returns the next state together with whether the event was accepted.
    /// A refused event leaves the state unchanged.
    #[must_use]
    pub fn on_event(self, event: LendingEvent) -> (Self, bool) {
        match (self, event) {
            (Self::Available, LendingEvent::Lend) => (Self::Unavailable, true),
            (Self::Unavailable, LendingEvent::Lend) => (Self::Unavailable, false),
            (_, LendingEvent::Return) => (Self::Available, true),
        }
    }
}
