//! Read-only import of seed records from JSON

use crate::catalog::Catalog;
use crate::error::Result;
use crate::types::BookRecord;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Parse a JSON array of book records
pub fn read_records<R: Read>(reader: R) -> Result<Vec<BookRecord>> {
    Ok(serde_json::from_reader(reader)?)
}

/// Build a catalog from a JSON array of book records
///
/// Duplicate ISBNs fail the whole import.
pub fn read_catalog<R: Read>(reader: R) -> Result<Catalog> {
    let records = read_records(reader)?;
    Ok(Catalog::from_records(records)?)
}

/// Load a catalog from a JSON seed file
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Catalog> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let catalog = read_catalog(BufReader::new(file))?;
    tracing::info!("Loaded {} books from {}", catalog.len(), path.display());
    Ok(catalog)
}
