//! HTML rendering.
//!
//! These are maud functions that return `Markup` for complete pages; both
//! the static export and the HTTP server go through them.

pub mod catalog;
pub mod components;
pub mod detail;

pub use catalog::CatalogPage;
pub use detail::{render_detail, LOADING_TEXT, NOT_FOUND_TEXT};
