//! Source file discovery
//!
//! Uses walkdir for recursive traversal. Hidden directories are included and no
//! ignore files are honoured.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Extension scanned when none is configured
pub const DEFAULT_EXTENSION: &str = "js";

/// Check whether a file name ends with `.<ext>` for one of `extensions`
pub fn has_source_extension(path: &Path, extensions: &[String]) -> bool {
    let name = match path.file_name().and_then(|n| n.to_str()) {
        Some(n) => n,
        None => return false,
    };
    extensions
        .iter()
        .any(|ext| name.ends_with(&format!(".{}", ext.trim_start_matches('.'))))
}

/// Collect source files under `root`, in file-name order per directory
pub fn source_files(root: &Path, extensions: &[String]) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                tracing::debug!(error = %e, "skipping unreadable entry");
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        if has_source_extension(entry.path(), extensions) {
            files.push(entry.into_path());
        }
    }

    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::tempdir;

    fn js() -> Vec<String> {
        vec![DEFAULT_EXTENSION.to_string()]
    }

    #[test]
    fn test_scan_empty_dir() {
        let temp = tempdir().unwrap();
        assert!(source_files(temp.path(), &js()).is_empty());
    }

    #[test]
    fn test_scan_filters_by_extension() {
        let temp = tempdir().unwrap();
        File::create(temp.path().join("app.js")).unwrap();
        File::create(temp.path().join("app.ts")).unwrap();
        File::create(temp.path().join("notes.json")).unwrap();
        File::create(temp.path().join("README.md")).unwrap();

        let files = source_files(temp.path(), &js());
        assert_eq!(files, vec![temp.path().join("app.js")]);
    }

    #[test]
    fn test_scan_recurses_into_hidden_dirs() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join(".hidden/deep")).unwrap();
        fs::create_dir_all(temp.path().join("routes")).unwrap();
        File::create(temp.path().join(".hidden/deep/a.js")).unwrap();
        File::create(temp.path().join("routes/b.js")).unwrap();

        let files = source_files(temp.path(), &js());
        assert_eq!(files.len(), 2);
        assert!(files.contains(&temp.path().join(".hidden/deep/a.js")));
        assert!(files.contains(&temp.path().join("routes/b.js")));
    }

    #[test]
    fn test_scan_order_is_deterministic() {
        let temp = tempdir().unwrap();
        File::create(temp.path().join("b.js")).unwrap();
        File::create(temp.path().join("a.js")).unwrap();
        File::create(temp.path().join("c.js")).unwrap();

        let first = source_files(temp.path(), &js());
        let second = source_files(temp.path(), &js());
        assert_eq!(first, second);
        assert_eq!(first[0], temp.path().join("a.js"));
    }

    #[test]
    fn test_scan_missing_root_is_empty() {
        let temp = tempdir().unwrap();
        let missing = temp.path().join("missing");
        assert!(source_files(&missing, &js()).is_empty());
    }

    #[test]
    fn test_directory_named_like_source_is_skipped() {
        let temp = tempdir().unwrap();
        fs::create_dir(temp.path().join("vendor.js")).unwrap();
        assert!(source_files(temp.path(), &js()).is_empty());
    }

    #[test]
    fn test_has_source_extension() {
        let exts = vec!["js".to_string(), ".mjs".to_string()];
        assert!(has_source_extension(Path::new("src/app.js"), &exts));
        assert!(has_source_extension(Path::new("src/app.mjs"), &exts));
        assert!(!has_source_extension(Path::new("src/app.cjs"), &exts));
        assert!(!has_source_extension(Path::new("src/appjs"), &exts));
        assert!(!has_source_extension(Path::new("src/app.js.map"), &exts));
    }
}
