//! Catalog listing output

use serde::Serialize;

/// Result of listing the catalog
///
/// An empty catalog is reported as [`Listing::Empty`] rather than an empty
/// list so callers can render a dedicated message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "entries", rename_all = "snake_case")]
pub enum Listing {
    /// The catalog holds no books
    Empty,

    /// One described line per book, in insertion order
    Entries(Vec<String>),
}

impl Listing {
    /// Whether the catalog was empty
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// The described lines, empty for [`Listing::Empty`]
    pub fn entries(&self) -> &[String] {
        match self {
            Self::Empty => &[],
            Self::Entries(entries) => entries,
        }
    }
}
