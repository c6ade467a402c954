use proptest::prelude::*;

use crate::{availability::Availability, book::Book};

/// Helper building the book used by the walkthrough tests
fn dune() -> Book {
    Book::new("Dune", "Frank Herbert")
}

#[test]
fn test_new_book_starts_unavailable() {
    let book = dune();
    assert_eq!(book.title(), "Dune");
    assert_eq!(book.author(), "Frank Herbert");
    assert_eq!(book.availability(), Availability::Unavailable);
    assert!(!book.is_available());
}

#[test]
fn test_lend_after_construction_is_refused() {
    let mut book = dune();
    assert!(!book.lend());
    assert!(!book.is_available());
}

#[test]
fn test_lend_return_walkthrough() {
    let mut book = dune();

    assert!(!book.lend());
    assert!(!book.is_available());

    assert!(book.return_book());
    assert!(book.is_available());

    assert!(book.lend());
    assert!(!book.is_available());

    // Second lend in a row has nothing to lend
    assert!(!book.lend());
    assert!(!book.is_available());
}

#[test]
fn test_return_is_idempotent() {
    let mut book = dune();
    assert!(book.return_book());
    assert!(book.return_book());
    assert!(book.is_available());
}

#[test]
fn test_empty_strings_are_accepted() {
    let book = Book::new("", "");
    assert_eq!(book.title(), "");
    assert_eq!(book.author(), "");
    assert!(!book.is_available());
}

#[test]
fn test_display() {
    assert_eq!(dune().to_string(), "Dune by Frank Herbert");
}

proptest! {
    #[test]
    fn new_book_is_never_available(title in ".*", author in ".*") {
        let mut book = Book::new(title.clone(), author.clone());
        prop_assert_eq!(book.title(), title.as_str());
        prop_assert_eq!(book.author(), author.as_str());
        prop_assert!(!book.is_available());
        prop_assert!(!book.lend());
        prop_assert!(!book.is_available());
    }

    #[test]
    fn return_then_lend_succeeds_every_round(title in "\\PC*", rounds in 1usize..64) {
        let mut book = Book::new(title, "anonymous");
        for _ in 0..rounds {
            prop_assert!(book.return_book());
            prop_assert!(book.is_available());
            prop_assert!(book.lend());
            prop_assert!(!book.is_available());
        }
        prop_assert!(!book.lend());
    }
}
