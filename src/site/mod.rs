//! Static site generation (`build` mode).

pub mod export;

pub use export::{export_site, ExportSummary, SiteError};
