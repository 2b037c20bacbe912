//! Core types for the Libris catalog

mod listing;
mod record;

pub use listing::Listing;
pub use record::BookRecord;
