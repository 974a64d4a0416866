//! Geo Glimpse
//!
//! Fetches country metadata from the REST Countries API and renders a
//! searchable catalog plus one detail page per country.
//!
//! # Architecture Overview
//!
//! ```text
//!     ┌──────────────┐     ┌──────────┐     ┌───────────────┐
//!     │   upstream   │────▶│ country  │────▶│ catalog       │──┐
//!     │ /v3.1/all    │     │ Snapshot │     │ filter/format │  │
//!     │ /v3.1/name/* │     └──────────┘     └───────────────┘  │   ┌────────┐
//!     └──────────────┘           │          ┌───────────────┐  ├──▶│ render │
//!                                └─────────▶│ detail        │──┘   └───┬────┘
//!                                           │ lookup/view   │          │
//!                                           └───────────────┘          ▼
//!                                                          ┌─────────────────────┐
//!                                                          │ site (build) or     │
//!                                                          │ http (serve)        │
//!                                                          └─────────────────────┘
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use geo_glimpse::lifecycle::startup::{self, Overrides};

#[derive(Parser)]
#[command(name = "geo-glimpse")]
#[command(about = "Country catalog static site generator and server", long_about = None)]
struct Cli {
    /// Path to a TOML config file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Upstream API base URL.
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the countries once and write a static site
    Build {
        /// Output directory
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Fetch the countries once and serve the pages over HTTP
    Serve {
        /// Bind address, e.g. 127.0.0.1:3000
        #[arg(short, long)]
        bind: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut overrides = Overrides {
        base_url: cli.base_url,
        log_level: cli.log_level,
        ..Overrides::default()
    };
    match &cli.command {
        Commands::Build { out } => overrides.output_dir = out.clone(),
        Commands::Serve { bind } => overrides.bind_address = bind.clone(),
    }

    let config = startup::resolve_config(cli.config.as_deref(), &overrides)?;
    startup::init_observability(&config);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        base_url = %config.upstream.base_url,
        "geo-glimpse starting"
    );

    match cli.command {
        Commands::Build { .. } => {
            let summary = startup::build(&config).await?;
            tracing::info!(
                out_dir = %config.build.output_dir,
                detail_pages = summary.detail_pages,
                "Build complete"
            );
        }
        Commands::Serve { .. } => {
            startup::serve(config).await?;
            tracing::info!("Shutdown complete");
        }
    }

    Ok(())
}
