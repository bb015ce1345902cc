//! Symbol table parsing and schema definitions.
//!
//! This module handles:
//! - Reading the symbol table from disk
//! - Extracting (address, type, name) triples line by line
//! - Dropping symbols outside the ROM image
//! - Defining the symbol and report schema

pub mod schema;
pub mod symbol_table;

// Re-export main types
pub use schema::{Category, CategoryUsage, RawSymbol, SizedSymbol, Symbol, UsageReport};
pub use symbol_table::{
    leading_address, parse_address, parse_line, parse_symbol_table, read_symbol_file,
};
