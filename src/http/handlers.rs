//! Route handlers.
//!
//! ## Routes
//!
//! - `GET /` - Catalog page, filtered by `?q=` and `?region=`
//! - `GET /health` - Health check (JSON)
//! - `GET /{slug}` - Detail page

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::catalog::{RegionFilter, RenderPhase};
use crate::config::DetailSource;
use crate::country::unslug;
use crate::detail::DetailState;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::render::{render_detail, CatalogPage};

/// Catalog query string.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CatalogParams {
    pub q: String,
    pub region: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub countries: usize,
}

/// Render the catalog. The server response is the only render, so numbers
/// go out in their stabilized form.
pub async fn catalog(
    State(state): State<AppState>,
    Query(params): Query<CatalogParams>,
) -> Response {
    let region = RegionFilter::parse(&params.region);
    tracing::debug!(q = %params.q, region = %region, "Rendering catalog");

    let page = CatalogPage::new(&state.snapshot, &params.q, &region, RenderPhase::Stabilized);
    metrics::record_page("catalog");
    page.render().into_response()
}

/// Render a detail page, answering 404 when the slug resolves to nothing.
pub async fn detail(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    let outcome = match state.detail_source {
        DetailSource::Snapshot => state.snapshot.lookup(&slug).cloned(),
        DetailSource::Upstream => state.client.find_by_name(&unslug(&slug)).await,
    };
    let page = DetailState::Loading.resolve(outcome);

    let status = match page {
        DetailState::Found(_) => StatusCode::OK,
        _ => {
            tracing::debug!(slug = %slug, "Country not found");
            StatusCode::NOT_FOUND
        }
    };
    metrics::record_page("detail");
    (status, render_detail(&page)).into_response()
}

pub async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        countries: state.snapshot.len(),
    })
}
