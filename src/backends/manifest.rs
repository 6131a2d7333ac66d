//! Backend project detection
//!
//! A plain substring check over the root `package.json`. The manifest is not
//! parsed, so a marker anywhere in the text counts.

use std::fs;
use std::path::Path;

/// Manifest file looked up at the scan root (not recursively)
pub const MANIFEST_FILE: &str = "package.json";

/// Quoted framework names that mark a supported backend
pub const FRAMEWORK_MARKERS: [&str; 3] = ["\"express\"", "\"koa\"", "\"hapi\""];

/// Check whether `root` looks like a backend project using a supported framework
pub fn looks_like_supported_project(root: &Path) -> bool {
    let manifest = root.join(MANIFEST_FILE);
    if !manifest.is_file() {
        tracing::debug!(path = %manifest.display(), "no manifest");
        return false;
    }

    let content = match fs::read_to_string(&manifest) {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!(path = %manifest.display(), error = %e, "error reading manifest");
            return false;
        }
    };

    let found = FRAMEWORK_MARKERS
        .iter()
        .find(|marker| content.contains(*marker));
    tracing::debug!(path = %manifest.display(), marker = ?found, "manifest checked");
    found.is_some()
}
