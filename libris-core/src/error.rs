//! Error types for Libris Core

use thiserror::Error;

/// Result type alias using LibrisError
pub type Result<T> = std::result::Result<T, LibrisError>;

/// Top-level error type for all Libris operations
#[derive(Debug, Error)]
pub enum LibrisError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Seed error: {0}")]
    Seed(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by catalog and record operations.
///
/// Each variant carries the ISBN the operation was keyed on. A failed
/// operation never mutates the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("A book with ISBN {0} already exists.")]
    DuplicateIsbn(String),

    #[error("The book with ISBN {0} was not found in the library.")]
    NotFound(String),

    #[error("The book with ISBN {0} is already checked out.")]
    AlreadyCheckedOut(String),

    #[error("The book with ISBN {0} is not checked out.")]
    NotCheckedOut(String),
}

impl CatalogError {
    /// The ISBN the failed operation referred to
    pub fn isbn(&self) -> &str {
        match self {
            Self::DuplicateIsbn(isbn)
            | Self::NotFound(isbn)
            | Self::AlreadyCheckedOut(isbn)
            | Self::NotCheckedOut(isbn) => isbn,
        }
    }
}
