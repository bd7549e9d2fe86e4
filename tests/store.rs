//! Dataset loading from disk.

mod common;
use common::*;

use folio::{blocks, Block, BlogStore, FolioError};
use pretty_assertions::assert_eq;

#[test]
fn loads_dataset_file_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("blogs.json");
    std::fs::write(
        &path,
        r#"[
            {"id": 2, "slug": "second", "title": "Second", "excerpt": "E", "content": "body",
             "image": "/b.png", "author": "A", "date": "2025-02-01", "category": "C", "tags": []},
            {"id": 1, "slug": "first", "title": "First", "excerpt": "E", "content": "body",
             "image": "/a.png", "author": "A", "date": "2025-01-01", "category": "C", "tags": ["t"]}
        ]"#,
    )
    .unwrap();

    let store = BlogStore::load(&path).unwrap();
    let slugs: Vec<&str> = store.all().iter().map(|r| r.slug.as_str()).collect();
    assert_eq!(slugs, vec!["second", "first"]);
    assert_eq!(store.by_slug("first").map(|r| r.id), Some(1));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = BlogStore::load(&dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, FolioError::Io(_)));
}

#[test]
fn every_present_slug_resolves_to_its_record() {
    let records: Vec<_> = (1..=20).map(|i| record(i, &format!("post-{}", i), &[])).collect();
    let store = BlogStore::from_records(records.clone()).unwrap();
    assert_eq!(store.len(), records.len());
    for record in &records {
        assert_eq!(store.by_slug(&record.slug), Some(record));
    }
    assert_eq!(store.by_slug("post-21"), None);
}

#[test]
fn formatter_example_yields_four_blocks() {
    let got: Vec<Block> = blocks("## A\n\ntext\n### B").collect();
    assert_eq!(got, vec![Block::Heading2("A"), Block::Break, Block::Paragraph("text"), Block::Heading3("B")]);
}
