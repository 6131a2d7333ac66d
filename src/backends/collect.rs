//! Route collection across files
//!
//! Runs a matcher over every candidate file and returns the sorted result.
//! A file that cannot be read is logged and contributes no routes.

use indicatif::ProgressBar;
use std::fs;
use std::path::{Path, PathBuf};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::backends::matcher::RouteMatcher;
use crate::core::error::{Result, ScanError};
use crate::core::model::{RouteRecord, RouteSet};

/// Read a source file as UTF-8
pub fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| ScanError::ReadFile {
        path: path.to_path_buf(),
        source,
    })
}

/// Extract routes from a single file, logging and swallowing read failures
fn routes_in_file(
    path: &Path,
    matcher: &dyn RouteMatcher,
    progress: &ProgressBar,
) -> Vec<RouteRecord> {
    let routes = match read_source(path) {
        Ok(content) => matcher.extract(&content, path),
        Err(e) => {
            progress.suspend(|| tracing::warn!("{}", e));
            Vec::new()
        }
    };
    progress.inc(1);
    routes
}

/// Apply `matcher` to every file and return the records sorted by method then path.
///
/// `progress` advances once per file and is cleared when collection ends.
pub fn collect_routes(
    files: &[PathBuf],
    matcher: &dyn RouteMatcher,
    progress: &ProgressBar,
) -> RouteSet {
    #[cfg(feature = "parallel")]
    let per_file: Vec<Vec<RouteRecord>> = files
        .par_iter()
        .map(|path| routes_in_file(path, matcher, progress))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let per_file: Vec<Vec<RouteRecord>> = files
        .iter()
        .map(|path| routes_in_file(path, matcher, progress))
        .collect();

    progress.finish_and_clear();

    let mut route_set = RouteSet::new();
    for routes in per_file {
        route_set.extend(routes);
    }

    tracing::debug!(
        files = files.len(),
        routes = route_set.len(),
        "route collection finished"
    );

    route_set.sort();
    route_set
}
