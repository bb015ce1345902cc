//! CLI command implementations.
//!
//! Commands orchestrate the various library components to perform user tasks.

pub mod models;
pub mod report;

// Re-export main command functions
pub use models::{OutputFormat, ReportArgs};
pub use report::{build_usage_report, execute_report, validate_args};
