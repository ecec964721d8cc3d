use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building or writing a sitemap.
#[derive(Debug, Error)]
pub enum SitemapError {
    /// Filesystem failure, tagged with the path that caused it.
    #[error("IO error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("base URL must be http:// or https:// followed by a host, got {0:?}")]
    InvalidBaseUrl(String),

    /// A page path that cannot be written into a UTF-8 sitemap.
    #[error("path is not valid UTF-8: {}", .0.display())]
    NonUtf8Path(PathBuf),
}

impl SitemapError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, SitemapError>;
