use std::fmt;

use serde::Serialize;

use crate::book::Book;

/// A book tagged with the library department that owns it.
///
/// Adds no lending behavior of its own; lend and return go through
/// [`LibraryBook::book_mut`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LibraryBook {
    /// The owned book
    book: Book,
    /// Free-form department label
    department: String,
}

impl LibraryBook {
    /// Create a library book, building a fresh [`Book`] with the same initial
    /// state as [`Book::new`].
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self { book: Book::new(title, author), department: department.into() }
    }

    /// The wrapped book
    #[must_use]
    pub fn book(&self) -> &Book {
        &self.book
    }

    /// Mutable access to the wrapped book, for lending and returning
    pub fn book_mut(&mut self) -> &mut Book {
        &mut self.book
    }

    /// Department that owns the book
    #[must_use]
    pub fn department(&self) -> &str {
        &self.department
    }

    /// Give up the department tag and keep the book
    #[must_use]
    pub fn into_book(self) -> Book {
        self.book
    }
}

impl fmt::Display for LibraryBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.book, self.department)
    }
}
