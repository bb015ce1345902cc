//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.
//!
//! Malformed symbol table lines are not errors; the parser skips them.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a symbol table
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("File '{}' not found!", .0.display())]
    FileNotFound(PathBuf),

    #[error("Failed to read '{}': {source}", path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that can occur while emitting a report
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write report: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}
