//! Catalog view subsystem.
//!
//! # Data Flow
//! ```text
//! Snapshot + (query, region)
//!     → filter.rs (stable subsequence, region options)
//!     → format.rs (raw or grouped numbers per RenderPhase)
//!     → render::catalog (table rows)
//! ```

pub mod filter;
pub mod format;

pub use filter::{filter, filter_entries, region_options, NameQuery, RegionFilter, ALL_REGIONS};
pub use format::{group_thousands, RenderPhase};
