//! Error types and process exit codes

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Error reading file {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("The directory '{}' does not exist.", .0.display())]
    MissingDirectory(PathBuf),

    #[error("The directory '{}' does not appear to be a supported backend.", .0.display())]
    UnsupportedProject(PathBuf),

    #[error("Error exporting routes to {}: {source}", .path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScanError {
    /// Process exit code for aborts caused by this error.
    ///
    /// `ReadFile` never aborts a run: collection logs it and skips the file.
    /// It maps to the generic failure code only so the match stays total.
    pub fn exit_code(&self) -> u8 {
        match self {
            ScanError::ReadFile { .. } => 1,
            ScanError::MissingDirectory(_) => 2,
            ScanError::UnsupportedProject(_) => 3,
            ScanError::Export { .. } => 4,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScanError>;
