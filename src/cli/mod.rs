//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand
//! and returns the process exit code.

mod analyze;
mod compare;

pub use analyze::run_analyze;
pub use compare::run_compare;

// Re-export config types used by handlers
pub use crate::config::{AnalyzeConfig, CompareConfig};
