use crate::utils::config::DEFAULT_SYMBOL_FILE;
use clap::ValueEnum;
use std::path::PathBuf;

/// How the report is printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Fixed-width text report
    #[default]
    Text,
    /// Pretty JSON report
    Json,
}

/// Arguments for the report command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ReportArgs {
    /// Symbol table to analyze
    pub symbol_file: PathBuf,

    /// Output format
    pub format: OutputFormat,

    /// Cap on ranked symbols (None = all)
    pub top: Option<usize>,
}

impl Default for ReportArgs {
    fn default() -> Self {
        Self {
            symbol_file: PathBuf::from(DEFAULT_SYMBOL_FILE),
            format: OutputFormat::Text,
            top: None,
        }
    }
}
