//! Interactive menu shell.
//!
//! # Responsibility
//! - Run the read-eval-print loop between the operator and the catalog.
//! - Surface store errors as messages; never let them escape the loop.
//!
//! # Invariants
//! - The shell owns all stdout writes; core only emits `log` events.
//! - Catalog errors are recovered locally; the loop ends only on the exit
//!   option or EOF at the menu prompt.

use crate::input::{collect_author, collect_title, collect_year, read_prompted_line};
use bookshelf_core::{Book, BookRepository, CatalogService};
use log::{debug, info};
use std::io::{self, BufRead, Write};

/// Menu loop over generic I/O handles.
///
/// Generic over `BufRead`/`Write` so whole sessions can run against
/// scripted input in tests.
pub struct Shell<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Runs the menu loop until the operator exits or input reaches EOF.
    ///
    /// # Errors
    /// Only propagates transport-level I/O failures; catalog errors are
    /// printed and the loop continues.
    pub fn run<S: BookRepository>(&mut self, service: &mut CatalogService<S>) -> io::Result<()> {
        loop {
            self.print_menu()?;
            let choice =
                match read_prompted_line(&mut self.input, &mut self.output, "Select an option: ")? {
                    Some(choice) => choice,
                    // EOF at the menu prompt ends the session cleanly.
                    None => break,
                };

            debug!("event=menu_choice module=shell choice={}", choice.trim());
            match choice.trim() {
                "1" => self.add_book(service)?,
                "2" => self.find_book(service)?,
                "3" => self.list_books(service)?,
                "4" => {
                    writeln!(self.output, "Goodbye!")?;
                    break;
                }
                _ => {
                    writeln!(self.output, "Invalid option. Please select a valid option.")?;
                }
            }
        }
        info!(
            "event=session_end module=shell status=ok catalog_len={}",
            service.book_count()
        );
        Ok(())
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Menu:")?;
        writeln!(self.output, "1. Add book")?;
        writeln!(self.output, "2. Find book by title")?;
        writeln!(self.output, "3. List all books")?;
        writeln!(self.output, "4. Exit")
    }

    fn add_book<S: BookRepository>(&mut self, service: &mut CatalogService<S>) -> io::Result<()> {
        let Some(title) = collect_title(&mut self.input, &mut self.output)? else {
            return writeln!(
                self.output,
                "Could not read the book title after three attempts. Returning to the main menu."
            );
        };
        let Some(author) = collect_author(&mut self.input, &mut self.output)? else {
            return writeln!(
                self.output,
                "Could not read the book author after three attempts. Returning to the main menu."
            );
        };
        let Some(year) = collect_year(&mut self.input, &mut self.output)? else {
            return writeln!(
                self.output,
                "Could not read the publication year after three attempts. Returning to the main menu."
            );
        };

        let book = Book::new(title.clone(), author, year);
        match service.add_book(book) {
            Ok(()) => writeln!(self.output, "Book '{title}' added to the catalog."),
            Err(err) => writeln!(self.output, "{err}"),
        }
    }

    fn find_book<S: BookRepository>(&mut self, service: &CatalogService<S>) -> io::Result<()> {
        let Some(title) = read_prompted_line(
            &mut self.input,
            &mut self.output,
            "Enter the title of the book to find: ",
        )?
        else {
            return Ok(());
        };

        match service.find_by_title(&title) {
            Ok(book) => writeln!(self.output, "Book found: {book}"),
            Err(err) => writeln!(self.output, "{err}"),
        }
    }

    fn list_books<S: BookRepository>(&mut self, service: &CatalogService<S>) -> io::Result<()> {
        let books = service.list_books();
        if books.is_empty() {
            return writeln!(self.output, "The catalog is empty.");
        }

        writeln!(self.output, "Books in the catalog:")?;
        for book in books {
            writeln!(self.output, "- {book}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Shell;
    use bookshelf_core::{Book, CatalogService, MemoryBookRepository};
    use std::io::Cursor;

    fn run_session(script: &str) -> (String, CatalogService<MemoryBookRepository>) {
        let mut service = CatalogService::new(MemoryBookRepository::new());
        let output = run_session_with(script, &mut service);
        (output, service)
    }

    fn run_session_with(
        script: &str,
        service: &mut CatalogService<MemoryBookRepository>,
    ) -> String {
        let mut output = Vec::new();
        let mut shell = Shell::new(Cursor::new(script.to_string()), &mut output);
        shell.run(service).expect("session I/O should not fail");
        String::from_utf8(output).expect("shell output should be UTF-8")
    }

    #[test]
    fn exit_option_ends_session_with_goodbye() {
        let (transcript, service) = run_session("4\n");
        assert!(transcript.contains("Goodbye!"));
        assert_eq!(service.book_count(), 0);
    }

    #[test]
    fn eof_at_menu_ends_session_cleanly() {
        let (transcript, _) = run_session("");
        assert!(transcript.contains("Select an option: "));
        assert!(!transcript.contains("Goodbye!"));
    }

    #[test]
    fn unrecognized_option_redisplays_menu() {
        let (transcript, _) = run_session("9\n4\n");
        assert!(transcript.contains("Invalid option. Please select a valid option."));
        assert_eq!(transcript.matches("Menu:").count(), 2);
    }

    #[test]
    fn add_then_find_then_list_full_session() {
        let script = "1\n1984\nOrwell\n1949\n1\nDune\nHerbert\n1965\n2\ndune\n3\n4\n";
        let (transcript, service) = run_session(script);

        assert!(transcript.contains("Book '1984' added to the catalog."));
        assert!(transcript.contains("Book 'Dune' added to the catalog."));
        assert!(transcript.contains("Book found: Dune (author: Herbert, year: 1965)"));

        let list_at = transcript
            .find("Books in the catalog:")
            .expect("list header should be printed");
        let listing = &transcript[list_at..];
        let first = listing.find("- 1984 (author: Orwell, year: 1949)").unwrap();
        let second = listing.find("- Dune (author: Herbert, year: 1965)").unwrap();
        assert!(first < second, "insertion order must be preserved");

        assert_eq!(service.book_count(), 2);
    }

    #[test]
    fn find_missing_title_prints_not_found() {
        let script = "1\nDune\nHerbert\n1965\n2\nBrave New World\n4\n";
        let (transcript, _) = run_session(script);
        assert!(transcript.contains("no book found with the title 'Brave New World'"));
    }

    #[test]
    fn list_on_empty_catalog_prints_empty_message() {
        let (transcript, _) = run_session("3\n4\n");
        assert!(transcript.contains("The catalog is empty."));
        assert!(!transcript.contains("Books in the catalog:"));
    }

    #[test]
    fn title_retry_exhaustion_aborts_add_and_returns_to_menu() {
        let script = "1\n\n\n\n4\n";
        let (transcript, service) = run_session(script);
        assert!(transcript.contains(
            "Could not read the book title after three attempts. Returning to the main menu."
        ));
        assert_eq!(service.book_count(), 0);
        assert!(transcript.contains("Goodbye!"));
    }

    #[test]
    fn author_retry_exhaustion_aborts_add() {
        let script = "1\nDune\nH3rbert\nH3rbert\nH3rbert\n4\n";
        let (transcript, service) = run_session(script);
        assert!(transcript.contains(
            "Could not read the book author after three attempts. Returning to the main menu."
        ));
        assert_eq!(service.book_count(), 0);
    }

    #[test]
    fn year_retry_exhaustion_aborts_add() {
        let script = "1\nDune\nHerbert\nabc\n0\n-3\n4\n";
        let (transcript, service) = run_session(script);
        assert!(transcript.contains(
            "Could not read the publication year after three attempts. Returning to the main menu."
        ));
        assert_eq!(service.book_count(), 0);
    }

    #[test]
    fn empty_author_surfaces_store_validation_error() {
        // The charset rule lets "" through; the store's non-empty check is
        // the backstop and its message reaches the operator.
        let script = "1\nDune\n\n1965\n4\n";
        let (transcript, service) = run_session(script);
        assert!(transcript.contains("book author cannot be empty"));
        assert_eq!(service.book_count(), 0);
    }

    #[test]
    fn catalog_persists_across_menu_iterations_within_one_run() {
        let mut service = CatalogService::new(MemoryBookRepository::new());
        run_session_with("1\n1984\nOrwell\n1949\n4\n", &mut service);
        let transcript = run_session_with("3\n4\n", &mut service);

        assert!(transcript.contains("- 1984 (author: Orwell, year: 1949)"));
        assert!(
            service
                .find_by_title("1984")
                .is_ok(),
            "book added in a previous loop iteration stays findable"
        );

        let book = Book::new("Dune", "Herbert", 1965);
        service.add_book(book).unwrap();
        assert_eq!(service.book_count(), 2);
    }
}
