//! Route declaration matching
//!
//! Heuristic, line-oriented matching of route registrations such as
//! `app.get('/users/:id', handler)`. This is not a parser: multi-line calls,
//! escaped quotes and router mounting are not understood.

use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

use crate::core::model::{HttpMethod, RouteRecord};

/// Express-style registration on an `app` receiver
/// Format: app.<method>('<path>' or app.<method>("<path>"
const EXPRESS_ROUTE_PATTERN: &str =
    r#"^\s*app\.(get|post|put|delete|patch)\s*\(\s*(?:'(/[\w/{}:-]*)'|"(/[\w/{}:-]*)")"#;

/// Static regex for Express-style registrations
pub static EXPRESS_ROUTE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(EXPRESS_ROUTE_PATTERN).expect("Invalid EXPRESS_ROUTE_RE regex"));

/// Split content into lines, treating `\r\n`, `\n` and a lone `\r` as line breaks
pub fn source_lines(content: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = content;

    while !rest.is_empty() {
        match rest.find(['\r', '\n']) {
            Some(i) => {
                lines.push(&rest[..i]);
                let skip = if rest[i..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[i + skip..];
            }
            None => {
                lines.push(rest);
                break;
            }
        }
    }

    lines
}

/// Extracts route records from file content
pub trait RouteMatcher: Sync {
    fn extract(&self, content: &str, source: &Path) -> Vec<RouteRecord>;
}

/// Matches `app.<method>('<path>'` at the start of a line
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpressMatcher;

impl RouteMatcher for ExpressMatcher {
    fn extract(&self, content: &str, source: &Path) -> Vec<RouteRecord> {
        let mut routes = Vec::new();

        for (index, line) in source_lines(content).into_iter().enumerate() {
            let Some(caps) = EXPRESS_ROUTE_RE.captures(line) else {
                continue;
            };

            let method = match caps[1].parse::<HttpMethod>() {
                Ok(m) => m,
                Err(_) => continue,
            };
            let path = match caps.get(2).or_else(|| caps.get(3)) {
                Some(p) => p.as_str(),
                None => continue,
            };

            routes.push(RouteRecord::new(method, path, source, (index + 1) as u32));
        }

        routes
    }
}
