//! Startup orchestration.
//!
//! # Responsibilities
//! - Load and validate configuration, apply CLI overrides
//! - Initialize logging and metrics
//! - Fetch the snapshot once
//! - Run the static export or bind the HTTP listener
//!
//! # Design Decisions
//! - Fail fast on configuration errors
//! - Upstream failure is not a startup error: the site renders empty
//! - Listeners start last (traffic only when the snapshot is loaded)

use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::{load_config, validate_config, ConfigError, SiteConfig};
use crate::http::HttpServer;
use crate::observability::{init_logging, metrics};
use crate::site::{export_site, ExportSummary, SiteError};
use crate::upstream::{CountryClient, UpstreamError};

/// Errors that abort startup.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Upstream client error: {0}")]
    Upstream(#[from] UpstreamError),

    #[error("Export error: {0}")]
    Site(#[from] SiteError),

    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Command-line overrides applied on top of the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub base_url: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub bind_address: Option<String>,
    pub log_level: Option<String>,
}

/// Load the config file (or defaults), apply overrides, validate.
pub fn resolve_config(path: Option<&Path>, overrides: &Overrides) -> Result<SiteConfig, StartupError> {
    let mut config = match path {
        Some(path) => load_config(path)?,
        None => SiteConfig::default(),
    };

    if let Some(base_url) = &overrides.base_url {
        config.upstream.base_url = base_url.clone();
    }
    if let Some(output_dir) = &overrides.output_dir {
        config.build.output_dir = output_dir.display().to_string();
    }
    if let Some(bind_address) = &overrides.bind_address {
        config.server.bind_address = bind_address.clone();
    }
    if let Some(log_level) = &overrides.log_level {
        config.observability.log_level = log_level.clone();
    }

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Initialize logging and, when enabled, the metrics exporter.
pub fn init_observability(config: &SiteConfig) {
    init_logging(&config.observability.log_level);

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }
}

/// Fetch the snapshot and write the static site.
pub async fn build(config: &SiteConfig) -> Result<ExportSummary, StartupError> {
    let client = CountryClient::new(&config.upstream)?;
    let snapshot = client.load_snapshot().await;
    let out_dir = PathBuf::from(&config.build.output_dir);

    let summary = tokio::task::spawn_blocking(move || export_site(&snapshot, &out_dir))
        .await
        .map_err(std::io::Error::other)??;
    Ok(summary)
}

/// Fetch the snapshot, then serve until shutdown.
pub async fn serve(config: SiteConfig) -> Result<(), StartupError> {
    let client = CountryClient::new(&config.upstream)?;
    let snapshot = client.load_snapshot().await;

    let listener = TcpListener::bind(&config.server.bind_address).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        countries = snapshot.len(),
        "Listening for connections"
    );

    HttpServer::new(config, snapshot, client).run(listener).await?;
    Ok(())
}
