//! Report command implementation.
//!
//! The report command:
//! 1. Reads the symbol table
//! 2. Parses ROM symbols
//! 3. Estimates symbol sizes
//! 4. Filters and classifies symbols
//! 5. Prints the usage report

use super::models::{OutputFormat, ReportArgs};
use crate::aggregator::{classify_symbols, estimate_sizes, to_report};
use crate::output::{analyzing_banner, render_report, write_report_json};
use crate::parser::{parse_symbol_table, read_symbol_file, UsageReport};
use anyhow::{Context, Result};
use log::{debug, info};
use std::time::Instant;

/// Run the whole pipeline over an in-memory symbol table
///
/// **Public** - pure entry point, used by execute_report and tests
///
/// # Arguments
/// * `source` - Name recorded in the report (usually the file path)
/// * `content` - Full symbol table text
pub fn build_usage_report(source: &str, content: &str) -> UsageReport {
    let lines: Vec<&str> = content.lines().collect();

    let raw = parse_symbol_table(&lines);
    let sized = estimate_sizes(&lines, raw);
    let symbols = classify_symbols(sized);

    to_report(source, &symbols)
}

/// Execute the report command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Symbol file missing or unreadable
/// * Report could not be written to stdout
pub fn execute_report(args: &ReportArgs) -> Result<()> {
    let start_time = Instant::now();
    let source = args.symbol_file.display().to_string();

    if args.format == OutputFormat::Text {
        println!("{}", analyzing_banner(&source));
    }

    info!("Step 1/3: Reading symbol table...");
    let content = read_symbol_file(&args.symbol_file)?;

    info!("Step 2/3: Analyzing symbols...");
    let report = build_usage_report(&source, &content);

    debug!(
        "Report: {} symbols, {} bytes in {} categories",
        report.symbol_count,
        report.total_size,
        report.categories.len()
    );

    info!("Step 3/3: Writing report...");
    match args.format {
        OutputFormat::Text => println!("{}", render_report(&report, args.top)),
        OutputFormat::Json => write_report_json(&report, std::io::stdout().lock())
            .context("Failed to write JSON report")?,
    }

    let elapsed = start_time.elapsed();
    info!("Report completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}

/// Validate report arguments
///
/// **Public** - can be called before execute_report for early validation
pub fn validate_args(args: &ReportArgs) -> Result<()> {
    if args.symbol_file.as_os_str().is_empty() {
        anyhow::bail!("Symbol file path cannot be empty");
    }

    if args.top == Some(0) {
        anyhow::bail!("--top must be greater than 0");
    }

    Ok(())
}
