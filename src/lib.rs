//! Geo Glimpse: country catalog site generator and server.

pub mod catalog;
pub mod config;
pub mod country;
pub mod detail;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod render;
pub mod site;
pub mod upstream;

pub use config::schema::SiteConfig;
pub use country::{CountryRecord, Snapshot};
pub use http::HttpServer;
pub use upstream::CountryClient;
