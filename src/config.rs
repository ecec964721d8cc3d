use std::path::PathBuf;

use crate::error::{Result, SitemapError};
use crate::filter::ExclusionRule;

/// Public host every generated URL hangs off.
pub const DEFAULT_BASE_URL: &str = "https://www.jejutoktokyi.com";

/// Output file name, relative to the scan root.
pub const DEFAULT_OUTPUT: &str = "sitemap.xml";

/// Backup and reference folders that never belong in the sitemap.
pub const DEFAULT_EXCLUDES: [&str; 5] = [
    "_seo_backup_",
    "백업",
    "그냥 자료들",
    "경쟁업체 참고",
    "tools",
];

pub const COLOR_RED: &str = "\x1b[31m";
pub const COLOR_YELLOW: &str = "\x1b[33m";
pub const COLOR_CYAN: &str = "\x1b[36m";
pub const COLOR_RESET: &str = "\x1b[0m";

/// Everything one sitemap run needs. Nothing is read from globals.
#[derive(Debug, Clone)]
pub struct SitemapConfig {
    pub root: PathBuf,
    /// Scheme and host, never with a trailing slash.
    pub base_url: String,
    /// Where the XML lands. Relative paths resolve against `root`.
    pub output: PathBuf,
    pub excludes: Vec<ExclusionRule>,
    /// Emit `<lastmod>` from each file's modification time.
    pub lastmod: bool,
}

impl SitemapConfig {
    /// Build a config rooted at `root` with the stock base URL, output and exclusions.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            excludes: default_exclusions(),
            lastmod: false,
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        let host = base_url
            .strip_prefix("http://")
            .or_else(|| base_url.strip_prefix("https://"))
            .map(|rest| rest.trim_end_matches('/'));
        if host.map_or(true, str::is_empty) {
            return Err(SitemapError::InvalidBaseUrl(base_url.to_string()));
        }
        self.base_url = base_url.trim_end_matches('/').to_string();
        Ok(self)
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Append extra substring exclusions after the defaults.
    pub fn with_extra_excludes<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excludes
            .extend(patterns.into_iter().map(|p| ExclusionRule::Substring(p.into())));
        self
    }

    pub fn with_lastmod(mut self, lastmod: bool) -> Self {
        self.lastmod = lastmod;
        self
    }

    pub fn output_path(&self) -> PathBuf {
        if self.output.is_absolute() {
            self.output.clone()
        } else {
            self.root.join(&self.output)
        }
    }
}

pub fn default_exclusions() -> Vec<ExclusionRule> {
    let mut rules = vec![ExclusionRule::GitMetadata];
    rules.extend(
        DEFAULT_EXCLUDES
            .iter()
            .map(|s| ExclusionRule::Substring((*s).to_string())),
    );
    rules
}
