use crate::config::{COLOR_CYAN, COLOR_RED, COLOR_RESET, COLOR_YELLOW};
use crate::error::{Result, SitemapError};
use chrono::{DateTime, NaiveDate, Utc};
use std::{fs, path::Path};
use tracing::debug;

pub fn print_error(message: &str) {
    eprintln!("{}ERROR{}: {}", COLOR_RED, COLOR_RESET, message);
}

pub fn print_warning(message: &str) {
    eprintln!("{}WARNING{}: {}", COLOR_YELLOW, COLOR_RESET, message);
}

pub fn print_info(message: &str) {
    eprintln!("{}INFO{}: {}", COLOR_CYAN, COLOR_RESET, message);
}

/// Success summary, uncolored on stdout.
pub fn print_ok(message: &str) {
    println!("[OK] {}", message);
}

/// Modification date of `path` in UTC.
pub fn get_last_modified_date(path: &Path) -> Result<NaiveDate> {
    let modified = fs::metadata(path)
        .and_then(|m| m.modified())
        .map_err(|e| SitemapError::io(path, e))?;
    let modified: DateTime<Utc> = modified.into();
    Ok(modified.date_naive())
}

/// Replace whatever sits at `path` with `xml`.
pub fn write_sitemap(path: &Path, xml: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| SitemapError::io(parent, e))?;
    }
    fs::write(path, xml.as_bytes()).map_err(|e| SitemapError::io(path, e))?;
    debug!(path = %path.display(), bytes = xml.len(), "wrote sitemap");
    Ok(())
}
