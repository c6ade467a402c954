use std::fmt;

use serde::Serialize;
use tracing::{debug, info};

use crate::{availability::Availability, events::LendingEvent};

/// A single book and its availability for lending.
///
/// The availability flag is private: the only way to change it is through
/// [`Book::lend`] and [`Book::return_book`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Book {
    /// Title, fixed at construction
    title: String,
    /// Author, fixed at construction
    author: String,
    /// Current lending state
    availability: Availability,
}

impl Book {
    /// Create a book with the given title and author.
    ///
    /// Neither value is validated. The book starts out
    /// [`Availability::Unavailable`], so it must be returned once before the
    /// first lend can succeed.
    #[must_use]
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self { title: title.into(), author: author.into(), availability: Availability::default() }
    }

    /// Title of the book
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Author of the book
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Current lending state
    #[must_use]
    pub fn availability(&self) -> Availability {
        self.availability
    }

    /// Whether the book can be lent right now
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.availability.is_available()
    }

    /// Try to lend the book.
    ///
    /// Returns `true` and marks the book unavailable if it was available.
    /// Otherwise nothing changes and `false` is returned.
    #[must_use = "a refused lend is only reported through the returned bool"]
    pub fn lend(&mut self) -> bool {
        self.apply(LendingEvent::Lend)
    }

    /// Put the book back on the shelf. Always succeeds.
    pub fn return_book(&mut self) -> bool {
        self.apply(LendingEvent::Return)
    }

    /// Run `event` through the transition table and store the next state
    fn apply(&mut self, event: LendingEvent) -> bool {
        let from = self.availability;
        let (to, accepted) = from.on_event(event);
        self.availability = to;

        if accepted {
            debug!(title = %self.title, %from, %to, ?event, "lending transition applied");
        } else {
            info!(title = %self.title, state = %from, ?event, "lending transition refused");
        }

        accepted
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {}", self.title, self.author)
    }
}

#[cfg(test)]
mod tests;
