//! Immutable record collection held for one render cycle.
//!
//! # Responsibilities
//! - Own the fetched records in upstream order
//! - Assign every record a unique routing slug
//! - Resolve a slug back to its record
//!
//! # Design Decisions
//! - Built once, then shared read-only via `Arc`
//! - Official names are not guaranteed to slug uniquely; the first record
//!   keeps the plain slug and later ones get `-2`, `-3`, ... in order

use std::collections::HashMap;

use crate::country::record::CountryRecord;

/// The record set for one build or server lifetime.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    records: Vec<CountryRecord>,
    slugs: Vec<String>,
    by_slug: HashMap<String, usize>,
}

impl Snapshot {
    pub fn new(records: Vec<CountryRecord>) -> Self {
        let mut slugs = Vec::with_capacity(records.len());
        let mut by_slug = HashMap::with_capacity(records.len());

        for (idx, record) in records.iter().enumerate() {
            let base = record.slug();
            let mut slug = base.clone();
            let mut n = 2;
            while by_slug.contains_key(&slug) {
                slug = format!("{base}-{n}");
                n += 1;
            }
            if slug != base {
                tracing::warn!(
                    official_name = %record.official_name(),
                    slug = %base,
                    assigned = %slug,
                    "Slug collision, assigning suffixed slug"
                );
            }
            by_slug.insert(slug.clone(), idx);
            slugs.push(slug);
        }

        Self {
            records,
            slugs,
            by_slug,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[CountryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Slug assigned to the record at `index`.
    pub fn slug_at(&self, index: usize) -> Option<&str> {
        self.slugs.get(index).map(String::as_str)
    }

    /// Look up a record by its slug.
    pub fn lookup(&self, slug: &str) -> Option<&CountryRecord> {
        self.by_slug.get(slug).map(|&idx| &self.records[idx])
    }

    /// Records paired with their slugs, in snapshot order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &CountryRecord)> {
        self.slugs.iter().map(String::as_str).zip(self.records.iter())
    }
}

impl From<Vec<CountryRecord>> for Snapshot {
    fn from(records: Vec<CountryRecord>) -> Self {
        Self::new(records)
    }
}
