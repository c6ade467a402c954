//! Book lending model for a small library.
//!
//! A [`Book`] carries a title, an author and a private availability flag that
//! only [`Book::lend`] and [`Book::return_book`] can change. A
//! [`LibraryBook`] pairs an owned book with the department that holds it.

pub mod availability;
pub mod book;
pub mod error;
pub mod events;
pub mod export;
pub mod library_book;
pub mod telemetry;

pub use availability::Availability;
pub use book::Book;
pub use error::LibraryError;
pub use events::LendingEvent;
pub use export::JsonExport;
pub use library_book::LibraryBook;
