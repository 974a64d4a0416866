//! Country data model.
//!
//! # Data Flow
//! ```text
//! upstream JSON
//!     → record.rs (CountryRecord, lenient decoding)
//!     → snapshot.rs (ordered records + unique slugs)
//!     → catalog / detail views
//! ```

pub mod record;
pub mod slug;
pub mod snapshot;

pub use record::CountryRecord;
pub use slug::{is_safe_segment, slugify, unslug};
pub use snapshot::Snapshot;
