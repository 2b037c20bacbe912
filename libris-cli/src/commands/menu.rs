//! Interactive menu implementation

use super::list::write_listing;
use anyhow::Result;
use libris_core::{BookRecord, Catalog, CatalogError};
use std::io::{self, BufRead, Write};

const MENU: &str = "\nLibrary Menu:\n\
1. Add a book\n\
2. Remove a book\n\
3. View all books\n\
4. Check out a book\n\
5. Return a book\n\
6. Exit the system\n";

/// A menu entry selected by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Add,
    Remove,
    View,
    CheckOut,
    Return,
    Exit,
}

impl MenuChoice {
    fn parse(input: &str) -> Option<Self> {
        match input {
            "1" => Some(Self::Add),
            "2" => Some(Self::Remove),
            "3" => Some(Self::View),
            "4" => Some(Self::CheckOut),
            "5" => Some(Self::Return),
            "6" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Whether the session should keep reading commands
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

/// Run the interactive menu on stdin/stdout
pub fn menu(catalog: &mut Catalog) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(stdin.lock(), stdout.lock()).run(catalog)
}

/// Prompting wrapper over an input and output stream
struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn run(mut self, catalog: &mut Catalog) -> Result<()> {
        tracing::debug!("Starting menu with {} books", catalog.len());

        loop {
            write!(self.output, "{}", MENU)?;
            let Some(choice) = self.prompt("Select an option: ")? else {
                break;
            };

            let flow = match MenuChoice::parse(&choice) {
                Some(MenuChoice::Exit) => Flow::Stop,
                Some(choice) => self.dispatch(choice, catalog)?,
                None => {
                    writeln!(self.output, "Invalid option. Please try again.")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Stop {
                break;
            }
        }

        self.output.flush()?;
        tracing::debug!("Menu closed with {} books", catalog.len());
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice, catalog: &mut Catalog) -> Result<Flow> {
        match choice {
            MenuChoice::Add => {
                let Some(title) = self.prompt("Enter title: ")? else {
                    return Ok(Flow::Stop);
                };
                let Some(author) = self.prompt("Enter author: ")? else {
                    return Ok(Flow::Stop);
                };
                let Some(isbn) = self.prompt("Enter ISBN: ")? else {
                    return Ok(Flow::Stop);
                };
                let result = catalog.add_book(BookRecord::new(title, author, isbn));
                self.report(result, "Book added successfully.")?;
            }
            MenuChoice::Remove => {
                let Some(isbn) = self.prompt("Enter ISBN to remove: ")? else {
                    return Ok(Flow::Stop);
                };
                let result = catalog.remove_book(&isbn).map(|_| ());
                self.report(result, "Book removed successfully.")?;
            }
            MenuChoice::View => write_listing(catalog, false, &mut self.output)?,
            MenuChoice::CheckOut => {
                let Some(isbn) = self.prompt("Enter ISBN to check out: ")? else {
                    return Ok(Flow::Stop);
                };
                let result = catalog.check_out_book(&isbn);
                self.report(result, "Book checked out successfully.")?;
            }
            MenuChoice::Return => {
                let Some(isbn) = self.prompt("Enter ISBN to return: ")? else {
                    return Ok(Flow::Stop);
                };
                let result = catalog.return_book(&isbn);
                self.report(result, "Book returned successfully.")?;
            }
            MenuChoice::Exit => return Ok(Flow::Stop),
        }

        Ok(Flow::Continue)
    }

    /// Print `message` and read one line; `None` at end of input.
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            tracing::debug!("End of input");
            return Ok(None);
        }

        // Invalid UTF-8 is replaced rather than ending the session.
        let mut line = String::from_utf8_lossy(&buf).into_owned();

        // Only the line terminator is stripped; ISBNs match exactly.
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    fn report(&mut self, result: Result<(), CatalogError>, success: &str) -> Result<()> {
        match result {
            Ok(()) => writeln!(self.output, "{}", success)?,
            Err(e) => {
                tracing::debug!("Operation failed: {}", e);
                writeln!(self.output, "Error: {}", e)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(catalog: &mut Catalog, input: &str) -> String {
        let mut output = Vec::new();
        Session::new(Cursor::new(input.as_bytes()), &mut output)
            .run(catalog)
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_choice_parsing() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Add));
        assert_eq!(MenuChoice::parse("6"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("7"), None);
        assert_eq!(MenuChoice::parse(" 1"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }

    #[test]
    fn test_add_view_check_out_remove() {
        let mut catalog = Catalog::new();
        let output = run(
            &mut catalog,
            "3\n1\nDune\nHerbert\n111\n3\n4\n111\n3\n2\n111\n3\n6\n",
        );

        assert!(output.contains("No books available in the library."));
        assert!(output.contains("Book added successfully."));
        assert!(output.contains("Title: Dune, Author: Herbert, ISBN: 111, Available: True"));
        assert!(output.contains("Book checked out successfully."));
        assert!(output.contains("Title: Dune, Author: Herbert, ISBN: 111, Available: False"));
        assert!(output.contains("Book removed successfully."));
        assert_eq!(output.matches("No books available in the library.").count(), 2);
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_errors_are_reported_and_loop_continues() {
        let mut catalog = Catalog::new();
        let output = run(
            &mut catalog,
            "5\n111\n1\nDune\nHerbert\n111\n1\nDune\nHerbert\n111\n5\n111\n4\n111\n4\n111\n6\n",
        );

        assert!(output.contains("Error: The book with ISBN 111 was not found in the library."));
        assert!(output.contains("Error: A book with ISBN 111 already exists."));
        assert!(output.contains("Error: The book with ISBN 111 is not checked out."));
        assert!(output.contains("Error: The book with ISBN 111 is already checked out."));
        assert_eq!(catalog.len(), 1);
        assert!(catalog.find("111").unwrap().is_checked_out());
    }

    #[test]
    fn test_invalid_option() {
        let mut catalog = Catalog::new();
        let output = run(&mut catalog, "9\n6\n");
        assert!(output.contains("Invalid option. Please try again."));
        assert_eq!(output.matches("Library Menu:").count(), 2);
    }

    #[test]
    fn test_end_of_input_stops_cleanly() {
        let mut catalog = Catalog::new();
        let output = run(&mut catalog, "1\nDune\n");
        assert!(output.ends_with("Enter author: "));
        assert!(catalog.is_empty());

        let output = run(&mut catalog, "");
        assert!(output.ends_with("Select an option: "));
    }

    #[test]
    fn test_invalid_utf8_input_is_replaced() {
        let mut catalog = Catalog::new();
        let mut output = Vec::new();
        Session::new(Cursor::new(&b"1\nD\xffune\nH\n1\n3\n6\n"[..]), &mut output)
            .run(&mut catalog)
            .unwrap();
        let output = String::from_utf8(output).unwrap();

        assert!(output.contains("Book added successfully."));
        assert!(output.contains("Title: D\u{FFFD}une, Author: H, ISBN: 1, Available: True"));
        assert_eq!(output.matches("Library Menu:").count(), 3);
        assert_eq!(catalog.find("1").unwrap().title(), "D\u{FFFD}une");
    }

    #[test]
    fn test_crlf_and_exact_isbn() {
        let mut catalog = Catalog::new();
        run(&mut catalog, "1\r\nDune\r\nHerbert\r\n 111\r\n6\r\n");
        assert!(catalog.contains(" 111"));
        assert!(!catalog.contains("111"));
    }
}
