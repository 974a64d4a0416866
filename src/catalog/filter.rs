//! Catalog filtering.
//!
//! # Responsibilities
//! - Match common names against a free-text query (case-insensitive)
//! - Match regions against a selected region (exact, case-sensitive)
//! - Derive the region option list from the snapshot
//!
//! # Design Decisions
//! - Pure functions over borrowed records; the snapshot is never mutated
//! - Output keeps snapshot order (stable filter, no re-sort)
//! - Absent fields never match and never error

use std::collections::HashSet;
use std::fmt;

use crate::country::{CountryRecord, Snapshot};

/// Label of the wildcard region option.
pub const ALL_REGIONS: &str = "All";

/// Region selector.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RegionFilter {
    /// Do not filter by region.
    #[default]
    All,
    /// Keep only records whose region equals this value exactly.
    Only(String),
}

impl RegionFilter {
    /// Parse a selector value; `"All"` and the empty string are the wildcard.
    pub fn parse(value: &str) -> Self {
        if value.is_empty() || value == ALL_REGIONS {
            Self::All
        } else {
            Self::Only(value.to_string())
        }
    }

    pub fn matches(&self, record: &CountryRecord) -> bool {
        match self {
            Self::All => true,
            Self::Only(region) => record.region() == Some(region.as_str()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_REGIONS,
            Self::Only(region) => region,
        }
    }
}

impl fmt::Display for RegionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Name predicate with the query lowercased once.
#[derive(Debug, Clone)]
pub struct NameQuery {
    needle: String,
}

impl NameQuery {
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.to_lowercase(),
        }
    }

    pub fn matches(&self, record: &CountryRecord) -> bool {
        self.needle.is_empty() || record.common_name().to_lowercase().contains(&self.needle)
    }
}

/// Records whose common name contains `query` and whose region matches.
pub fn filter<'a>(
    records: &'a [CountryRecord],
    query: &str,
    region: &RegionFilter,
) -> Vec<&'a CountryRecord> {
    let name = NameQuery::new(query);
    records
        .iter()
        .filter(|record| name.matches(record) && region.matches(record))
        .collect()
}

/// Same as [`filter`], keeping each record's slug alongside it.
pub fn filter_entries<'a>(
    snapshot: &'a Snapshot,
    query: &str,
    region: &RegionFilter,
) -> Vec<(&'a str, &'a CountryRecord)> {
    let name = NameQuery::new(query);
    snapshot
        .entries()
        .filter(|(_, record)| name.matches(record) && region.matches(record))
        .collect()
}

/// `"All"` followed by each distinct region in first-seen order.
pub fn region_options(records: &[CountryRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut options = vec![ALL_REGIONS.to_string()];

    for region in records.iter().filter_map(CountryRecord::region) {
        if seen.insert(region) {
            options.push(region.to_string());
        }
    }

    options
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> Vec<CountryRecord> {
        vec![
            CountryRecord::named("France", "French Republic", "Europe"),
            CountryRecord::named("Japan", "Japan", "Asia"),
            CountryRecord::named("Germany", "Federal Republic of Germany", "Europe"),
            CountryRecord::named("Brazil", "Federative Republic of Brazil", "Americas"),
            CountryRecord::named("South Africa", "Republic of South Africa", "Africa"),
            CountryRecord::named("Frankland", "Frankland", ""),
        ]
    }

    fn names(records: &[&CountryRecord]) -> Vec<String> {
        records.iter().map(|r| r.common_name().to_string()).collect()
    }

    #[test]
    fn test_france_japan_scenario() {
        let records = vec![
            CountryRecord::named("France", "French Republic", "Europe"),
            CountryRecord::named("Japan", "Japan", "Asia"),
        ];
        assert_eq!(names(&filter(&records, "fra", &RegionFilter::All)), vec!["France"]);
        assert_eq!(
            names(&filter(&records, "", &RegionFilter::parse("Asia"))),
            vec!["Japan"]
        );
        assert!(filter(&records, "zz", &RegionFilter::All).is_empty());
    }

    #[test]
    fn test_empty_query_and_wildcard_is_identity() {
        let records = snapshot();
        let result = filter(&records, "", &RegionFilter::All);
        assert_eq!(result.len(), records.len());
        for (kept, original) in result.iter().zip(records.iter()) {
            assert!(std::ptr::eq(*kept, original));
        }
    }

    #[test]
    fn test_result_is_ordered_subsequence() {
        let records = snapshot();
        for query in ["", "a", "r", "an", "xyz"] {
            for region in ["All", "Europe", "Asia", "Nowhere"] {
                let result = filter(&records, query, &RegionFilter::parse(region));
                let mut cursor = records.iter();
                for kept in result {
                    assert!(
                        cursor.any(|r| std::ptr::eq(r, kept)),
                        "{query}/{region} broke snapshot order"
                    );
                }
            }
        }
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let records = snapshot();
        for query in ["fr", "FR", "Fr", "rePUB"] {
            let lower = filter(&records, &query.to_lowercase(), &RegionFilter::All);
            let upper = filter(&records, &query.to_uppercase(), &RegionFilter::All);
            let given = filter(&records, query, &RegionFilter::All);
            assert_eq!(names(&lower), names(&upper));
            assert_eq!(names(&lower), names(&given));
        }
        assert_eq!(
            names(&filter(&records, "FRA", &RegionFilter::All)),
            vec!["France", "Frankland"]
        );
    }

    #[test]
    fn test_region_is_case_sensitive() {
        let records = snapshot();
        assert!(filter(&records, "", &RegionFilter::parse("europe")).is_empty());
        assert_eq!(
            names(&filter(&records, "", &RegionFilter::parse("Europe"))),
            vec!["France", "Germany"]
        );
    }

    #[test]
    fn test_missing_region_never_matches_a_named_region() {
        let records = snapshot();
        let result = filter(&records, "frank", &RegionFilter::parse("Europe"));
        assert!(result.is_empty());
        assert_eq!(
            names(&filter(&records, "frank", &RegionFilter::All)),
            vec!["Frankland"]
        );
    }

    #[test]
    fn test_region_options_first_seen_order() {
        let options = region_options(&snapshot());
        assert_eq!(options, vec!["All", "Europe", "Asia", "Americas", "Africa"]);
    }

    #[test]
    fn test_region_options_idempotent() {
        let first = region_options(&snapshot());
        let as_records: Vec<CountryRecord> = first
            .iter()
            .skip(1)
            .map(|region| CountryRecord::named("x", "x", region))
            .collect();
        let second = region_options(&as_records);
        assert_eq!(first, second);

        let unique: HashSet<&String> = first.iter().collect();
        assert_eq!(unique.len(), first.len());
    }

    #[test]
    fn test_region_filter_parse() {
        assert_eq!(RegionFilter::parse("All"), RegionFilter::All);
        assert_eq!(RegionFilter::parse(""), RegionFilter::All);
        assert_eq!(RegionFilter::parse("all"), RegionFilter::Only("all".into()));
        assert_eq!(RegionFilter::parse("Oceania").to_string(), "Oceania");
    }

    #[test]
    fn test_filter_entries_keeps_slugs() {
        let snapshot = Snapshot::new(snapshot());
        let entries = filter_entries(&snapshot, "japan", &RegionFilter::All);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].0, "japan");
    }
}
