//! ROM Usage Report CLI
//!
//! Prints a ranked ROM usage report from a linker symbol table.

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;

use rom_usage_report::commands::{execute_report, validate_args, OutputFormat, ReportArgs};
use rom_usage_report::utils::config::DEFAULT_SYMBOL_FILE;

/// ROM Usage Report - memory usage by symbol category
#[derive(Parser, Debug)]
#[command(name = "rom-usage")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the linker symbol table
    #[arg(default_value = DEFAULT_SYMBOL_FILE)]
    file: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Only list the N largest symbols
    #[arg(long)]
    top: Option<usize>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let args = ReportArgs {
        symbol_file: cli.file,
        format: cli.format,
        top: cli.top,
    };

    validate_args(&args)?;
    execute_report(&args)?;

    Ok(())
}
