//! JSON report output writer.

use crate::parser::schema::UsageReport;
use crate::utils::error::OutputError;
use log::debug;
use std::io::Write;

/// Write a report as pretty JSON
///
/// **Public** - main entry point for JSON output
///
/// # Errors
/// * `OutputError::SerializationFailed` - JSON serialization or write error
/// * `OutputError::WriteFailed` - Trailing newline could not be written
pub fn write_report_json<W: Write>(report: &UsageReport, mut writer: W) -> Result<(), OutputError> {
    debug!(
        "Writing JSON report: {} symbols, {} categories",
        report.symbol_count,
        report.categories.len()
    );

    serde_json::to_writer_pretty(&mut writer, report)?;
    writeln!(writer)?;
    writer.flush()?;

    Ok(())
}

/// Serialize a report to a pretty JSON string
pub fn report_to_string(report: &UsageReport) -> Result<String, OutputError> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Parse a report back from JSON
pub fn report_from_str(json: &str) -> Result<UsageReport, OutputError> {
    Ok(serde_json::from_str(json)?)
}
