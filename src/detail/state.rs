//! Detail page state machine.
//!
//! # States
//! - Loading: record resolution still in progress
//! - Found: record resolved, full detail rendered
//! - NotFound: lookup yielded no record
//!
//! # State Transitions
//! ```text
//! Loading → Found     (lookup returned a record)
//! Loading → NotFound  (lookup returned nothing or the fetch failed)
//! ```
//! Found and NotFound are terminal.

use crate::country::{CountryRecord, Snapshot};

/// Page-level state of one detail page instance.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DetailState {
    #[default]
    Loading,
    Found(Box<CountryRecord>),
    NotFound,
}

impl DetailState {
    /// Apply a lookup outcome. Terminal states ignore further outcomes.
    pub fn resolve(self, outcome: Option<CountryRecord>) -> Self {
        match self {
            Self::Loading => match outcome {
                Some(record) => Self::Found(Box::new(record)),
                None => Self::NotFound,
            },
            terminal => terminal,
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Loading)
    }

    pub fn record(&self) -> Option<&CountryRecord> {
        match self {
            Self::Found(record) => Some(&**record),
            _ => None,
        }
    }
}

/// Resolve a slug against the snapshot.
pub fn lookup<'a>(snapshot: &'a Snapshot, slug: &str) -> Option<&'a CountryRecord> {
    snapshot.lookup(slug)
}
