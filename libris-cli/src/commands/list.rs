//! List command implementation

use anyhow::Result;
use libris_core::{BookRecord, Catalog, Listing};
use std::io::{self, Write};

/// Message shown in place of a listing when the catalog is empty
pub(crate) const NO_BOOKS: &str = "No books available in the library.";

/// Print the catalog contents
pub fn list(catalog: &Catalog, json: bool) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_listing(catalog, json, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Write the catalog as described lines, or as a JSON array of records
pub(crate) fn write_listing<W: Write>(catalog: &Catalog, json: bool, out: &mut W) -> Result<()> {
    if json {
        let books: Vec<&BookRecord> = catalog.iter().collect();
        writeln!(out, "{}", serde_json::to_string_pretty(&books)?)?;
        return Ok(());
    }

    match catalog.list_books() {
        Listing::Empty => writeln!(out, "{}", NO_BOOKS)?,
        Listing::Entries(entries) => {
            for entry in entries {
                writeln!(out, "{}", entry)?;
            }
        }
    }

    Ok(())
}
