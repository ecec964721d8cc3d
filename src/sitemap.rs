//! Sitemap assembly: walk, filter, map to URLs, render, write.

use std::path::PathBuf;

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::config::SitemapConfig;
use crate::error::Result;
use crate::filter::should_skip;
use crate::io::{get_last_modified_date, write_sitemap};
use crate::site_map::collect_html_files;
use crate::url::{
    build_url, canonical_relative_path, dedupe_by, force_https, strip_blog_hub_index, strip_index,
};

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
const URLSET_OPEN: &str = r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#;
const URLSET_CLOSE: &str = "</urlset>";

/// One `<url>` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapEntry {
    pub loc: String,
    pub lastmod: Option<NaiveDate>,
}

/// What a finished run produced.
#[derive(Debug)]
pub struct GenerateReport {
    pub output: PathBuf,
    pub urls: Vec<String>,
}

impl GenerateReport {
    pub fn count(&self) -> usize {
        self.urls.len()
    }
}

/// Render entries as a sitemap document with `\n` line endings.
pub fn render_sitemap_xml(entries: &[SitemapEntry]) -> String {
    let mut xml = String::new();
    xml.push_str(XML_DECLARATION);
    xml.push('\n');
    xml.push_str(URLSET_OPEN);
    xml.push('\n');

    for entry in entries {
        xml.push_str("  <url><loc>");
        xml.push_str(&escape_xml(&entry.loc));
        xml.push_str("</loc>");
        if let Some(date) = entry.lastmod {
            xml.push_str(&format!("<lastmod>{}</lastmod>", date.format("%Y-%m-%d")));
        }
        xml.push_str("</url>\n");
    }

    xml.push_str(URLSET_CLOSE);
    xml.push('\n');
    xml
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Public URLs for every kept page under the root, in walk order, without repeats.
pub fn collect_entries(config: &SitemapConfig) -> Result<Vec<SitemapEntry>> {
    let mut candidates = Vec::new();

    for path in collect_html_files(&config.root)? {
        let canonical = canonical_relative_path(&path, &config.root)?;
        if should_skip(&canonical, &config.excludes) {
            debug!(path = %canonical, "excluded");
            continue;
        }
        let url = strip_index(&build_url(&config.base_url, &canonical));
        candidates.push((url, path));
    }

    let candidates: Vec<(String, PathBuf)> = candidates
        .into_iter()
        .map(|(url, path)| (force_https(&strip_blog_hub_index(&url)), path))
        .collect();

    dedupe_by(candidates, |(url, _)| url.as_str())
        .into_iter()
        .map(|(loc, path)| -> Result<SitemapEntry> {
            let lastmod = if config.lastmod {
                Some(get_last_modified_date(&path)?)
            } else {
                None
            };
            Ok(SitemapEntry { loc, lastmod })
        })
        .collect()
}

/// Build the sitemap for `config.root` and overwrite the output file.
pub fn generate(config: &SitemapConfig) -> Result<GenerateReport> {
    let entries = collect_entries(config)?;
    let xml = render_sitemap_xml(&entries);
    let output = config.output_path();
    write_sitemap(&output, &xml)?;

    info!(count = entries.len(), output = %output.display(), "sitemap generated");
    Ok(GenerateReport {
        output,
        urls: entries.into_iter().map(|e| e.loc).collect(),
    })
}
