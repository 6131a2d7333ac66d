//! Golden tests for routenum
//!
//! These tests run the binary against the fixture project and compare the
//! complete output. They guard:
//! - Output format stability across versions
//! - Sort order (method, then path, ties in discovery order)
//! - Report file layout

use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

/// Get the path to the fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Get the path to the sample project
fn sample_project() -> PathBuf {
    fixtures_dir().join("sample_project")
}

/// Create a command for running the routenum binary
fn routenum_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("routenum"))
}

const PLAIN_REPORT: &str = "\
DELETE /users/:id
GET /
GET /users/:id
GET /users/:id
PATCH /users/:id
POST /items
PUT /settings/{section}
";

const VERBOSE_REPORT: &str = "\
DELETE /users/:id - Defined in routes/admin.js at line 2
GET / - Defined in app.js at line 4
GET /users/:id - Defined in app.js at line 6
GET /users/:id - Defined in routes/admin.js at line 5
PATCH /users/:id - Defined in routes/admin.js at line 3
POST /items - Defined in app.js at line 5
PUT /settings/{section} - Defined in routes/admin.js at line 4
";

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Console Tests ====================

    #[test]
    fn golden_console_plain() {
        let output = routenum_cmd()
            .arg(sample_project())
            .arg("-y")
            .output()
            .expect("failed to execute");

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        let expected = format!(
            "\nFound the following routes:\n{}Total number of endpoints found: 7\n",
            PLAIN_REPORT
        );
        assert_eq!(stdout, expected);
    }

    #[test]
    fn golden_console_verbose() {
        let output = routenum_cmd()
            .arg(sample_project())
            .arg("-y")
            .arg("--verbose")
            .output()
            .expect("failed to execute");

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        let expected = format!(
            "\nFound the following routes:\n{}Total number of endpoints found: 7\n",
            VERBOSE_REPORT
        );
        assert_eq!(stdout, expected);
    }

    #[test]
    fn golden_verbose_extends_plain_lines() {
        for (plain, verbose) in PLAIN_REPORT.lines().zip(VERBOSE_REPORT.lines()) {
            assert!(verbose.starts_with(&format!("{} - Defined in ", plain)));
        }
    }

    // ==================== Export Tests ====================

    #[test]
    fn golden_text_export() {
        let temp = tempdir().unwrap();
        let target = temp.path().join("routes.txt");

        routenum_cmd()
            .arg(sample_project())
            .arg("-y")
            .arg("--export")
            .arg(&target)
            .assert()
            .success();

        assert_eq!(fs::read_to_string(&target).unwrap(), PLAIN_REPORT);
    }

    #[test]
    fn golden_text_export_verbose() {
        let temp = tempdir().unwrap();
        let target = temp.path().join("routes.txt");

        routenum_cmd()
            .arg(sample_project())
            .arg("-y")
            .arg("-v")
            .arg("--export")
            .arg(&target)
            .assert()
            .success();

        assert_eq!(fs::read_to_string(&target).unwrap(), VERBOSE_REPORT);
    }

    #[test]
    fn golden_json_export() {
        let temp = tempdir().unwrap();

        routenum_cmd()
            .current_dir(temp.path())
            .arg(sample_project())
            .arg("-y")
            .arg("--as-json")
            .assert()
            .success();

        let written = fs::read_to_string(temp.path().join("targets.json")).unwrap();
        assert!(written.starts_with("[\n    {\n        \"method\": \"DELETE\",\n"));

        let items: Vec<Value> = serde_json::from_str(&written).unwrap();
        assert_eq!(items.len(), 7);
        for item in &items {
            let obj = item.as_object().unwrap();
            assert_eq!(obj.len(), 2, "only method and route are exported");
        }

        // Same pairs, same order as the plain console report
        let pairs: Vec<String> = items
            .iter()
            .map(|v| {
                format!(
                    "{} {}",
                    v["method"].as_str().unwrap(),
                    v["route"].as_str().unwrap()
                )
            })
            .collect();
        let expected: Vec<&str> = PLAIN_REPORT.lines().collect();
        assert_eq!(pairs, expected);
    }

    // ==================== Stability Tests ====================

    #[test]
    fn golden_output_is_deterministic() {
        let run = || {
            routenum_cmd()
                .arg(sample_project())
                .arg("-y")
                .arg("-v")
                .output()
                .expect("failed to execute")
                .stdout
        };
        assert_eq!(run(), run());
    }
}
