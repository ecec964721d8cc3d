use std::{
    collections::HashSet,
    path::{Component, Path},
    sync::LazyLock,
};

use regex::Regex;

use crate::error::{Result, SitemapError};

const INDEX_FILE: &str = "index.html";
const BLOG_HUB_INDEX: &str = "/pages/blog/index.html";

static HTTP_SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^http://").expect("static scheme pattern"));

/// Forward-slash form of `path` relative to `root`, without any leading `./`.
///
/// Fails on names that are not valid UTF-8 rather than mangling them.
pub fn canonical_relative_path(path: &Path, root: &Path) -> Result<String> {
    let rel = pathdiff::diff_paths(path, root).unwrap_or_else(|| path.to_path_buf());
    let parts = rel
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part),
            _ => None,
        })
        .map(|part| {
            part.to_str()
                .ok_or_else(|| SitemapError::NonUtf8Path(path.to_path_buf()))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(parts.join("/"))
}

pub fn build_url(base_url: &str, canonical: &str) -> String {
    format!("{}/{}", base_url, canonical)
}

/// `…/dir/index.html` becomes `…/dir/`.
pub fn strip_index(url: &str) -> String {
    if url.ends_with("/index.html") {
        url[..url.len() - INDEX_FILE.len()].to_string()
    } else {
        url.to_string()
    }
}

/// Keeps the blog hub pointing at its directory. Runs after [`strip_index`], so
/// in practice it never fires; kept so the URL pipeline stays in two layers.
pub fn strip_blog_hub_index(url: &str) -> String {
    if url.ends_with(BLOG_HUB_INDEX) {
        url[..url.len() - INDEX_FILE.len()].to_string()
    } else {
        url.to_string()
    }
}

pub fn force_https(url: &str) -> String {
    HTTP_SCHEME.replace(url, "https://").into_owned()
}

/// Drops repeats, keeping the first occurrence of each URL in place.
pub fn dedupe(urls: Vec<String>) -> Vec<String> {
    dedupe_by(urls, |url| url.as_str())
}

/// [`dedupe`] for items that carry their URL alongside other data.
pub fn dedupe_by<T, F>(items: Vec<T>, key: F) -> Vec<T>
where
    F: Fn(&T) -> &str,
{
    let mut seen = HashSet::new();
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        if seen.insert(key(&item).to_string()) {
            out.push(item);
        }
    }
    out
}
