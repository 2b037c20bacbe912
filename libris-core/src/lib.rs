//! Libris Core Library
//!
//! This crate provides the in-memory book catalog for the Libris library
//! manager: book records with a checkout flag, and a catalog keyed by ISBN
//! that enforces key uniqueness and existence on every operation.

pub mod catalog;
pub mod error;
pub mod seed;
pub mod types;

pub use catalog::Catalog;
pub use error::{CatalogError, LibrisError, Result};
pub use types::{BookRecord, Listing};
