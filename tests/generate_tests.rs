//! End-to-end runs of the sitemap pipeline over temporary site trees.

use std::{fs, path::Path};

use jejusitemap::{generate, SitemapConfig, SitemapError};
use tempfile::TempDir;

fn touch(root: &Path, rel: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, "<!doctype html>").unwrap();
}

fn site(files: &[&str]) -> TempDir {
    let dir = TempDir::new().expect("temp dir");
    for rel in files {
        touch(dir.path(), rel);
    }
    dir
}

#[test]
fn test_stock_site_layout() {
    let dir = site(&[
        "index.html",
        "about.html",
        "pages/blog/index.html",
        "pages/blog/post-1.html",
        "tools/debug.html",
        ".git/hooks/sample.html",
        "_seo_backup_20240101/index.html",
        "백업/old.html",
        "그냥 자료들/ref.html",
        "경쟁업체 참고/rival.html",
        "style.css",
    ]);

    let report = generate(&SitemapConfig::new(dir.path())).unwrap();
    assert_eq!(
        report.urls,
        vec![
            "https://www.jejutoktokyi.com/about.html",
            "https://www.jejutoktokyi.com/",
            "https://www.jejutoktokyi.com/pages/blog/",
            "https://www.jejutoktokyi.com/pages/blog/post-1.html",
        ]
    );

    let xml = fs::read_to_string(dir.path().join("sitemap.xml")).unwrap();
    assert_eq!(
        xml,
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n  \
         <url><loc>https://www.jejutoktokyi.com/about.html</loc></url>\n  \
         <url><loc>https://www.jejutoktokyi.com/</loc></url>\n  \
         <url><loc>https://www.jejutoktokyi.com/pages/blog/</loc></url>\n  \
         <url><loc>https://www.jejutoktokyi.com/pages/blog/post-1.html</loc></url>\n\
         </urlset>\n"
    );
}

#[test]
fn test_empty_tree_writes_empty_urlset() {
    let dir = site(&[]);
    let report = generate(&SitemapConfig::new(dir.path())).unwrap();

    assert_eq!(report.count(), 0);
    let xml = fs::read_to_string(report.output).unwrap();
    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"));
    assert!(!xml.contains("<url>"));
    assert!(xml.ends_with("</urlset>\n"));
}

#[test]
fn test_rerun_is_byte_identical() {
    let dir = site(&["a.html", "b/index.html", "c/d.html"]);
    let config = SitemapConfig::new(dir.path());

    generate(&config).unwrap();
    let first = fs::read(dir.path().join("sitemap.xml")).unwrap();
    generate(&config).unwrap();
    let second = fs::read(dir.path().join("sitemap.xml")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_http_base_url_is_forced_to_https() {
    let dir = site(&["a.html", "b/index.html"]);
    let config = SitemapConfig::new(dir.path())
        .with_base_url("http://example.org")
        .unwrap();

    let report = generate(&config).unwrap();
    assert_eq!(
        report.urls,
        vec!["https://example.org/a.html", "https://example.org/b/"]
    );
    assert!(report.urls.iter().all(|u| !u.starts_with("http://")));
}

#[test]
fn test_urls_are_unique() {
    let dir = site(&["x/index.html", "x/a.html", "y/index.html"]);
    let report = generate(&SitemapConfig::new(dir.path())).unwrap();

    let mut sorted = report.urls.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(sorted.len(), report.urls.len());
}

#[test]
fn test_substring_exclusion_is_not_segment_aware() {
    let dir = site(&["pages/mytools.html", "pages/guide.html"]);
    let report = generate(&SitemapConfig::new(dir.path())).unwrap();
    assert_eq!(
        report.urls,
        vec!["https://www.jejutoktokyi.com/pages/guide.html"]
    );
}

#[test]
fn test_extra_excludes_and_custom_output() {
    let dir = site(&["drafts/wip.html", "live.html"]);
    let config = SitemapConfig::new(dir.path())
        .with_extra_excludes(["drafts"])
        .with_output("public/sitemap.xml");

    let report = generate(&config).unwrap();
    assert_eq!(report.urls, vec!["https://www.jejutoktokyi.com/live.html"]);
    assert_eq!(report.output, dir.path().join("public/sitemap.xml"));
    assert!(report.output.is_file());
    assert!(!dir.path().join("sitemap.xml").exists());
}

#[test]
fn test_lastmod_dates_are_emitted_on_request() {
    let dir = site(&["a.html"]);
    let config = SitemapConfig::new(dir.path()).with_lastmod(true);

    generate(&config).unwrap();
    let xml = fs::read_to_string(dir.path().join("sitemap.xml")).unwrap();
    let line = xml
        .lines()
        .find(|l| l.contains("<loc>"))
        .expect("one url line");
    assert!(line.starts_with("  <url><loc>https://www.jejutoktokyi.com/a.html</loc><lastmod>"));
    assert!(line.ends_with("</lastmod></url>"));
}

#[test]
fn test_previous_sitemap_is_overwritten() {
    let dir = site(&["a.html"]);
    fs::write(dir.path().join("sitemap.xml"), "stale").unwrap();

    generate(&SitemapConfig::new(dir.path())).unwrap();
    let xml = fs::read_to_string(dir.path().join("sitemap.xml")).unwrap();
    assert!(!xml.contains("stale"));
    assert!(xml.contains("/a.html</loc>"));
}

#[test]
fn test_missing_root_fails() {
    let dir = TempDir::new().unwrap();
    let config = SitemapConfig::new(dir.path().join("missing"));
    assert!(generate(&config).is_err());
}

#[cfg(target_os = "linux")]
#[test]
fn test_non_utf8_file_name_is_an_error() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let dir = site(&["about.html"]);
    fs::write(dir.path().join(OsStr::from_bytes(b"caf\xe9.html")), "").unwrap();

    let err = generate(&SitemapConfig::new(dir.path())).unwrap_err();
    assert!(matches!(err, SitemapError::NonUtf8Path(_)));
    assert!(!dir.path().join("sitemap.xml").exists());
}

#[cfg(target_os = "linux")]
#[test]
fn test_non_utf8_directory_name_is_an_error() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let dir = site(&[]);
    let sub = dir.path().join(OsStr::from_bytes(b"d\xff"));
    fs::create_dir_all(&sub).unwrap();
    fs::write(sub.join("p.html"), "").unwrap();

    let err = generate(&SitemapConfig::new(dir.path())).unwrap_err();
    assert!(matches!(err, SitemapError::NonUtf8Path(p) if p == sub.join("p.html")));
}
