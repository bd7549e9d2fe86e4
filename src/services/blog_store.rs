use std::collections::HashSet;
use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::errors::FolioError;
use crate::types::BlogRecord;
use crate::utils::{is_url_safe_slug, parse_date};

/// Dataset compiled into the binary
const BUNDLED_DATA: &str = include_str!("../../data/blogs.json");

/// Read-only, ordered collection of blog posts.
///
/// Built once at startup and shared behind an `Arc`; there is no mutation API.
#[derive(Debug, Default)]
pub struct BlogStore {
    records: Vec<BlogRecord>,
}

impl BlogStore {
    /// Load the dataset bundled with the binary
    pub fn bundled() -> Result<Self, FolioError> {
        debug!("Loading bundled blog dataset");
        Self::from_json(BUNDLED_DATA)
    }

    /// Load a dataset from a JSON file on disk
    pub fn load(path: &Path) -> Result<Self, FolioError> {
        debug!("Loading blog dataset from {:?}", path);
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Parse and validate a JSON array of records
    pub fn from_json(raw: &str) -> Result<Self, FolioError> {
        let records: Vec<BlogRecord> = serde_json::from_str(raw)?;
        Self::from_records(records)
    }

    /// Validate records and freeze them into a store
    pub fn from_records(records: Vec<BlogRecord>) -> Result<Self, FolioError> {
        {
            let mut slugs = HashSet::with_capacity(records.len());
            let mut ids = HashSet::with_capacity(records.len());

            for (index, record) in records.iter().enumerate() {
                validate_record(index, record)?;
                if !ids.insert(record.id) {
                    return Err(FolioError::DuplicateId(record.id));
                }
                if !slugs.insert(record.slug.as_str()) {
                    return Err(FolioError::DuplicateSlug(record.slug.clone()));
                }
            }
        }

        info!("Loaded {} blog records", records.len());
        Ok(Self { records })
    }

    /// All records in source order
    pub fn all(&self) -> &[BlogRecord] {
        &self.records
    }

    /// First record whose slug equals `slug`
    pub fn by_slug(&self, slug: &str) -> Option<&BlogRecord> {
        let found = self.records.iter().find(|record| record.slug == slug);
        debug!("Slug lookup '{}': {}", slug, if found.is_some() { "hit" } else { "miss" });
        found
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn validate_record(index: usize, record: &BlogRecord) -> Result<(), FolioError> {
    let invalid = |reason: String| FolioError::InvalidRecord { index, reason };

    for (field, value) in [
        ("slug", &record.slug),
        ("title", &record.title),
        ("excerpt", &record.excerpt),
        ("author", &record.author),
    ] {
        if value.trim().is_empty() {
            return Err(invalid(format!("field '{}' is empty", field)));
        }
    }
    if !is_url_safe_slug(&record.slug) {
        return Err(invalid(format!("slug '{}' is not URL-safe", record.slug)));
    }
    if parse_date(&record.date).is_none() {
        return Err(invalid(format!("date '{}' is not a calendar date", record.date)));
    }
    Ok(())
}
