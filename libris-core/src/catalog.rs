//! In-memory catalog of book records keyed by ISBN

use crate::error::CatalogError;
use crate::types::{BookRecord, Listing};

/// Ordered collection of books with unique ISBNs
///
/// Lookups are exact, case-sensitive matches on the ISBN. Records keep their
/// insertion order, which is also the listing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    books: Vec<BookRecord>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from records, failing on the first duplicate ISBN
    pub fn from_records(
        records: impl IntoIterator<Item = BookRecord>,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for record in records {
            catalog.add_book(record)?;
        }
        Ok(catalog)
    }

    /// Number of books held
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Whether the catalog holds no books
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Iterate over the books in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &BookRecord> {
        self.books.iter()
    }

    /// Find a book by ISBN
    pub fn find(&self, isbn: &str) -> Option<&BookRecord> {
        self.books.iter().find(|b| b.isbn() == isbn)
    }

    /// Whether a book with this ISBN is held
    pub fn contains(&self, isbn: &str) -> bool {
        self.position(isbn).is_some()
    }

    /// Add a book, rejecting duplicate ISBNs
    pub fn add_book(&mut self, record: BookRecord) -> Result<(), CatalogError> {
        if self.contains(record.isbn()) {
            tracing::debug!(isbn = record.isbn(), "rejected duplicate ISBN");
            return Err(CatalogError::DuplicateIsbn(record.isbn().to_string()));
        }

        tracing::debug!(isbn = record.isbn(), title = record.title(), "added book");
        self.books.push(record);
        Ok(())
    }

    /// Remove a book and hand it back to the caller
    pub fn remove_book(&mut self, isbn: &str) -> Result<BookRecord, CatalogError> {
        let pos = self
            .position(isbn)
            .ok_or_else(|| CatalogError::NotFound(isbn.to_string()))?;

        let record = self.books.remove(pos);
        tracing::debug!(isbn, "removed book");
        Ok(record)
    }

    /// Check out the book with this ISBN
    pub fn check_out_book(&mut self, isbn: &str) -> Result<(), CatalogError> {
        self.find_mut(isbn)?.check_out()?;
        tracing::debug!(isbn, "checked out book");
        Ok(())
    }

    /// Return the book with this ISBN
    pub fn return_book(&mut self, isbn: &str) -> Result<(), CatalogError> {
        self.find_mut(isbn)?.return_book()?;
        tracing::debug!(isbn, "returned book");
        Ok(())
    }

    /// Describe every book in insertion order
    pub fn list_books(&self) -> Listing {
        if self.books.is_empty() {
            return Listing::Empty;
        }
        Listing::Entries(self.books.iter().map(BookRecord::describe).collect())
    }

    fn position(&self, isbn: &str) -> Option<usize> {
        self.books.iter().position(|b| b.isbn() == isbn)
    }

    fn find_mut(&mut self, isbn: &str) -> Result<&mut BookRecord, CatalogError> {
        self.books
            .iter_mut()
            .find(|b| b.isbn() == isbn)
            .ok_or_else(|| {
                tracing::debug!(isbn, "no book with this ISBN");
                CatalogError::NotFound(isbn.to_string())
            })
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a BookRecord;
    type IntoIter = std::slice::Iter<'a, BookRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.books.iter()
    }
}
