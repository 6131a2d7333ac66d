//! Renderer module
//!
//! Renders a RouteSet to the console, to a plain-text report, or to a JSON
//! report holding only method and route.

use colored::{ColoredString, Colorize};
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::path::Path;

use crate::core::error::{Result, ScanError};
use crate::core::model::{HttpMethod, RouteRecord, RouteSet};
use crate::core::paths::display_relative;

/// Fixed file name of the JSON report, written to the working directory
pub const JSON_EXPORT_FILE: &str = "targets.json";

/// One entry of the JSON report. File and line are not exported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedRoute {
    pub method: String,
    pub route: String,
}

impl From<&RouteRecord> for ExportedRoute {
    fn from(record: &RouteRecord) -> Self {
        Self {
            method: record.method().as_str().to_string(),
            route: record.path().to_string(),
        }
    }
}

/// Render options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    /// Append "Defined in ... at line N" to each line
    pub verbose: bool,
    /// Colour the method token in console output
    pub color: bool,
}

/// Renderer for route sets
pub struct Renderer<'a> {
    root: &'a Path,
    config: RenderConfig,
}

impl<'a> Renderer<'a> {
    /// `root` is the scan root that file locations are shown relative to
    pub fn new(root: &'a Path, config: RenderConfig) -> Self {
        Self { root, config }
    }

    /// Format one record as `METHOD PATH`, plus the location clause when verbose
    pub fn format_line(&self, record: &RouteRecord) -> String {
        self.format_with_method(record, record.method().as_str())
    }

    fn format_with_method(&self, record: &RouteRecord, method: impl std::fmt::Display) -> String {
        if self.config.verbose {
            format!(
                "{} {} - Defined in {} at line {}",
                method,
                record.path(),
                display_relative(record.source_file(), self.root),
                record.line()
            )
        } else {
            format!("{} {}", method, record.path())
        }
    }

    /// Render as plain text, one line per record
    pub fn render_text(&self, route_set: &RouteSet) -> String {
        route_set
            .iter()
            .map(|record| format!("{}\n", self.format_line(record)))
            .collect()
    }

    /// Render for the terminal, with header
    pub fn render_console(&self, route_set: &RouteSet) -> String {
        let mut output = String::from("\nFound the following routes:\n");
        for record in route_set.iter() {
            let line = if self.config.color {
                self.format_with_method(record, paint_method(record.method()))
            } else {
                self.format_line(record)
            };
            output.push_str(&line);
            output.push('\n');
        }
        output
    }

    /// Render the JSON report (4-space indentation, trailing newline)
    pub fn render_json(&self, route_set: &RouteSet) -> serde_json::Result<Vec<u8>> {
        let entries: Vec<ExportedRoute> = route_set.iter().map(ExportedRoute::from).collect();

        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        entries.serialize(&mut serializer)?;
        buf.push(b'\n');
        Ok(buf)
    }

    /// Write the plain-text report to `target`
    pub fn export_text(&self, route_set: &RouteSet, target: &Path) -> Result<()> {
        write_report(target, self.render_text(route_set).as_bytes())
    }

    /// Write the JSON report to `target`
    pub fn export_json(&self, route_set: &RouteSet, target: &Path) -> Result<()> {
        let bytes = self.render_json(route_set).map_err(|e| ScanError::Export {
            path: target.to_path_buf(),
            source: e.into(),
        })?;
        write_report(target, &bytes)
    }
}

fn write_report(target: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(target, bytes).map_err(|source| ScanError::Export {
        path: target.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %target.display(), bytes = bytes.len(), "report written");
    Ok(())
}

fn paint_method(method: HttpMethod) -> ColoredString {
    let name = method.as_str();
    let painted = match method {
        HttpMethod::Get => name.green(),
        HttpMethod::Post => name.yellow(),
        HttpMethod::Put => name.blue(),
        HttpMethod::Delete => name.red(),
        HttpMethod::Patch => name.magenta(),
    };
    painted.bold()
}
