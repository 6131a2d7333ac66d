//! Route Model
//!
//! Every matcher maps what it finds into `RouteRecord`s, and every renderer
//! consumes a sorted `RouteSet`.

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

/// HTTP method of a route declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl HttpMethod {
    /// Upper-case name, as printed and exported
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for HttpMethod {
    type Err = String;

    /// Parses the call-site spelling (`get`, `post`, ...). Only lower-case is accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "get" => Ok(HttpMethod::Get),
            "post" => Ok(HttpMethod::Post),
            "put" => Ok(HttpMethod::Put),
            "delete" => Ok(HttpMethod::Delete),
            "patch" => Ok(HttpMethod::Patch),
            _ => Err(format!("Unknown method: {}", s)),
        }
    }
}

/// One discovered route declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRecord {
    method: HttpMethod,
    path: String,
    source_file: PathBuf,
    line: u32,
}

impl RouteRecord {
    pub fn new(
        method: HttpMethod,
        path: impl Into<String>,
        source_file: impl Into<PathBuf>,
        line: u32,
    ) -> Self {
        Self {
            method,
            path: path.into(),
            source_file: source_file.into(),
            line,
        }
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    /// Route path pattern, e.g. `/users/:id`
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn source_file(&self) -> &Path {
        &self.source_file
    }

    /// 1-based line number of the declaration
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Output order: method name, then route path
    pub fn sort_key_cmp(&self, other: &Self) -> Ordering {
        self.method
            .as_str()
            .cmp(other.method.as_str())
            .then_with(|| self.path.cmp(&other.path))
    }
}

/// Ordered collection of route records
#[derive(Debug, Clone, Default)]
pub struct RouteSet {
    pub items: Vec<RouteRecord>,
}

impl RouteSet {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn extend(&mut self, items: impl IntoIterator<Item = RouteRecord>) {
        self.items.extend(items);
    }

    /// Stable sort by method then path; equal keys keep discovery order
    pub fn sort(&mut self) {
        self.items.sort_by(|a, b| a.sort_key_cmp(b));
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RouteRecord> {
        self.items.iter()
    }
}

impl IntoIterator for RouteSet {
    type Item = RouteRecord;
    type IntoIter = std::vec::IntoIter<RouteRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl FromIterator<RouteRecord> for RouteSet {
    fn from_iter<T: IntoIterator<Item = RouteRecord>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
