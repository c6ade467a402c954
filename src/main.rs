use library_lending::{Book, JsonExport, LibraryBook, LibraryError, telemetry};

/// Title used by both demo books
const TITLE: &str = "Harry Potter and the Philosopher's Stone";
/// Author used by both demo books
const AUTHOR: &str = "J.K. Rowling";

/// Print the outcome of a lend attempt
fn report_lend(lent: bool) {
    if lent {
        println!("Book successfully lent.");
    } else {
        println!("Book is not currently available. Try in some time.");
    }
}

/// Walk a book and a library book through the lending API once
fn main() -> Result<(), LibraryError> {
    telemetry::setup_tracing()?;

    let mut book = Book::new(TITLE, AUTHOR);
    println!("New book created. Title: {} Author: {}", book.title(), book.author());

    // New books start out unavailable
    report_lend(book.lend());

    book.return_book();
    println!("Book returned. {}", book.availability().get_description());
    report_lend(book.lend());

    let library_book = LibraryBook::new(TITLE, AUTHOR, "Children's Library, Oak Street");
    println!(
        "New book created. Title: {} Author: {}, Department: {}",
        library_book.book().title(),
        library_book.book().author(),
        library_book.department()
    );
    println!("{}", library_book.to_json()?);

    Ok(())
}
