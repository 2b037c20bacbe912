//! Snapshot tests for libris-core using insta
//!
//! These tests pin the listing and serialized record formats so that
//! unintended changes to user-visible output are caught.

use insta::{assert_json_snapshot, assert_snapshot};
use libris_core::{BookRecord, Catalog};

/// Helper to create a small catalog for testing
fn sample_catalog() -> Catalog {
    let mut catalog = Catalog::from_records([
        BookRecord::new("Dune", "Frank Herbert", "978-0441013593"),
        BookRecord::new("Emma", "Jane Austen", "978-0141439587"),
        BookRecord::new("Beloved", "Toni Morrison", "978-1400033416"),
    ])
    .unwrap();
    catalog.check_out_book("978-0141439587").unwrap();
    catalog
}

#[test]
fn test_listing_text_snapshot() {
    let catalog = sample_catalog();
    let text = catalog.list_books().entries().join("\n");

    assert_snapshot!(text, @r###"
    Title: Dune, Author: Frank Herbert, ISBN: 978-0441013593, Available: True
    Title: Emma, Author: Jane Austen, ISBN: 978-0141439587, Available: False
    Title: Beloved, Author: Toni Morrison, ISBN: 978-1400033416, Available: True
    "###);
}

#[test]
fn test_empty_listing_json_snapshot() {
    let catalog = Catalog::new();

    assert_json_snapshot!(catalog.list_books(), @r###"
    {
      "kind": "empty"
    }
    "###);
}

#[test]
fn test_listing_json_snapshot() {
    let mut catalog = Catalog::new();
    catalog
        .add_book(BookRecord::new("Dune", "Herbert", "111"))
        .unwrap();

    assert_json_snapshot!(catalog.list_books(), @r###"
    {
      "kind": "entries",
      "entries": [
        "Title: Dune, Author: Herbert, ISBN: 111, Available: True"
      ]
    }
    "###);
}

#[test]
fn test_record_json_snapshot() {
    let mut record = BookRecord::new("Dune", "Herbert", "111");
    record.check_out().unwrap();

    assert_json_snapshot!(record, @r###"
    {
      "title": "Dune",
      "author": "Herbert",
      "isbn": "111",
      "checked_out": true
    }
    "###);
}
