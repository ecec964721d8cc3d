//! Sitemap generator for a static HTML site tree.
//!
//! Walks a directory for `*.html`, drops backup and tooling folders, maps each
//! page to its public `https://` URL and writes a `sitemap.xml`.

pub mod args;
pub mod config;
pub mod error;
pub mod filter;
pub mod io;
pub mod logging;
pub mod site_map;
pub mod sitemap;
pub mod url;

pub use config::SitemapConfig;
pub use error::{Result, SitemapError};
pub use sitemap::{generate, GenerateReport, SitemapEntry};
