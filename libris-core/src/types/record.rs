//! A single catalogued book and its checkout state

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A book held by the catalog
///
/// The ISBN is fixed at construction; the only mutable state is whether the
/// book is currently checked out.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookRecord {
    /// Book title
    title: String,

    /// Book author
    author: String,

    /// Unique catalog key
    isbn: String,

    /// Whether the book is currently lent out
    #[serde(default)]
    checked_out: bool,
}

impl BookRecord {
    /// Create a new, available book record
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
            checked_out: false,
        }
    }

    /// Get the book title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the book author
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Get the ISBN
    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    /// Whether the book is currently checked out
    pub fn is_checked_out(&self) -> bool {
        self.checked_out
    }

    /// Whether the book can be checked out
    pub fn is_available(&self) -> bool {
        !self.checked_out
    }

    /// Mark the book as checked out
    pub fn check_out(&mut self) -> Result<(), CatalogError> {
        if self.checked_out {
            return Err(CatalogError::AlreadyCheckedOut(self.isbn.clone()));
        }
        self.checked_out = true;
        Ok(())
    }

    /// Mark the book as returned
    pub fn return_book(&mut self) -> Result<(), CatalogError> {
        if !self.checked_out {
            return Err(CatalogError::NotCheckedOut(self.isbn.clone()));
        }
        self.checked_out = false;
        Ok(())
    }

    /// Human-readable one-line summary, as shown in listings
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for BookRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let available = if self.is_available() { "True" } else { "False" };
        write!(
            f,
            "Title: {}, Author: {}, ISBN: {}, Available: {}",
            self.title, self.author, self.isbn, available
        )
    }
}
