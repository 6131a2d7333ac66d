//! Backends module - File discovery and route extraction
//!
//! Provides:
//! - scan: Source file discovery with walkdir
//! - manifest: Backend project detection from package.json
//! - matcher: Route declaration matching
//! - collect: Matching across files and sorting

pub mod collect;
pub mod manifest;
pub mod matcher;
pub mod scan;
