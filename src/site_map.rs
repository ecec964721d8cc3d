use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, trace};

use crate::error::{Result, SitemapError};

const HTML_SUFFIX: &str = ".html";

/// Every `*.html` file under `source_dir`, ordered by path components.
///
/// Dot-directories are walked like any other; `.git` is left to the exclusion
/// rules. Symlinked directories are not followed.
pub fn collect_html_files(source_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    fn traverse(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
        let entries = fs::read_dir(dir).map_err(|e| SitemapError::io(dir, e))?;
        for entry in entries {
            let entry = entry.map_err(|e| SitemapError::io(dir, e))?;
            let path = entry.path();
            let file_type = entry
                .file_type()
                .map_err(|e| SitemapError::io(&path, e))?;

            if file_type.is_dir() {
                trace!(dir = %path.display(), "descending");
                traverse(&path, files)?;
            } else if is_html(&path) && path.is_file() {
                files.push(path);
            }
        }
        Ok(())
    }

    traverse(source_dir, &mut files)?;
    files.sort_by(|a, b| {
        let a = a.strip_prefix(source_dir).unwrap_or(a);
        let b = b.strip_prefix(source_dir).unwrap_or(b);
        a.cmp(b)
    });
    debug!(count = files.len(), root = %source_dir.display(), "collected html files");
    Ok(files)
}

fn is_html(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|n| n.as_encoded_bytes().ends_with(HTML_SUFFIX.as_bytes()))
}
