//! Static export to disk.
//!
//! # Output Layout
//! ```text
//! {out}/index.html           catalog, initial render phase
//! {out}/{slug}/index.html    one detail page per record
//! {out}/404.html             "Country not found"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::catalog::{RegionFilter, RenderPhase};
use crate::country::{is_safe_segment, Snapshot};
use crate::detail::DetailState;
use crate::observability::metrics;
use crate::render::{render_detail, CatalogPage};

/// Errors writing the exported site.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// What an export produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportSummary {
    /// Detail pages written.
    pub detail_pages: usize,
    /// Records skipped because their slug is not a usable path segment.
    pub skipped: usize,
}

/// Write the whole site for `snapshot` into `out_dir`.
pub fn export_site(snapshot: &Snapshot, out_dir: &Path) -> Result<ExportSummary, SiteError> {
    create_dir(out_dir)?;

    let catalog = CatalogPage::new(snapshot, "", &RegionFilter::All, RenderPhase::Initial);
    write_page(&out_dir.join("index.html"), &catalog.render().into_string())?;
    metrics::record_page("catalog");

    let mut summary = ExportSummary::default();
    for (slug, record) in snapshot.entries() {
        if !is_safe_segment(slug) {
            tracing::warn!(
                common_name = %record.common_name(),
                slug = %slug,
                "Skipping record without a usable slug"
            );
            summary.skipped += 1;
            continue;
        }

        let dir = out_dir.join(slug);
        create_dir(&dir)?;
        let state = DetailState::Loading.resolve(Some(record.clone()));
        write_page(&dir.join("index.html"), &render_detail(&state).into_string())?;
        metrics::record_page("detail");
        summary.detail_pages += 1;
    }

    write_page(
        &out_dir.join("404.html"),
        &render_detail(&DetailState::NotFound).into_string(),
    )?;

    tracing::info!(
        out_dir = %out_dir.display(),
        detail_pages = summary.detail_pages,
        skipped = summary.skipped,
        "Static export complete"
    );
    Ok(summary)
}

fn create_dir(path: &Path) -> Result<(), SiteError> {
    fs::create_dir_all(path).map_err(|source| SiteError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn write_page(path: &Path, html: &str) -> Result<(), SiteError> {
    fs::write(path, html).map_err(|source| SiteError::Io {
        path: path.to_path_buf(),
        source,
    })
}
