//! Endpoint scanner: extract HTTP method + path pairs from generated routers.
//!
//! This is pattern matching against our own router template's shape, not a
//! Python parser. Anything a human added that still looks like
//! `@router.get("...")` will be picked up too.

use std::ffi::OsStr;
use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;

static ROUTE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)@router\.(get|post|put|delete|patch)\((.*?)\)").unwrap()
});

static PATH_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"['"](.*?)['"]"#).unwrap());

/// One declared route, derived from a router source file. Never persisted;
/// recomputed on every listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub router: String,
    pub method: String,
    pub path: String,
}

/// Extract every route declaration from one router's source text, in the
/// order they appear.
pub fn scan_source(router: &str, source: &str) -> Vec<Endpoint> {
    ROUTE_RE
        .captures_iter(source)
        .map(|caps| {
            let method = caps[1].to_uppercase();
            let path = PATH_RE
                .captures(&caps[2])
                .map(|p| p[1].to_string())
                .unwrap_or_else(|| "(unknown)".to_string());
            Endpoint {
                router: router.to_string(),
                method,
                path,
            }
        })
        .collect()
}

/// Scan every router file in a directory (skipping the `__init__.py`
/// aggregator) and return the endpoints sorted by (router, path), ties kept
/// in declaration order.
pub fn scan_dir(dir: &Path) -> Result<Vec<Endpoint>> {
    let mut files: Vec<std::path::PathBuf> = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory: {}", dir.display()))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension() == Some(OsStr::new("py"))
                && path.file_name() != Some(OsStr::new("__init__.py"))
        })
        .collect();
    files.sort();

    let mut endpoints = Vec::new();
    for file in &files {
        let source = std::fs::read_to_string(file)
            .with_context(|| format!("Failed to read: {}", file.display()))?;
        let router = file
            .file_stem()
            .map(|stem| stem.to_string_lossy().to_string())
            .unwrap_or_default();
        endpoints.extend(scan_source(&router, &source));
    }

    // Stable sort keeps declaration order among equal (router, path) keys
    endpoints.sort_by(|a, b| {
        (a.router.as_str(), a.path.as_str()).cmp(&(b.router.as_str(), b.path.as_str()))
    });
    Ok(endpoints)
}
