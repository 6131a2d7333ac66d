//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - Route model (RouteRecord, RouteSet)
//! - Rendering and export of route reports
//! - Path normalization utilities
//! - Error types and logging setup

pub mod error;
pub mod logging;
pub mod model;
pub mod paths;
pub mod render;
