//! Output writers for usage reports.
//!
//! - Fixed-width text report (default)
//! - Pretty JSON report

pub mod json;
pub mod text;

// Re-export main functions
pub use json::{report_from_str, report_to_string, write_report_json};
pub use text::{analyzing_banner, format_thousands, render_report};
