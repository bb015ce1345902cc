//! Symbol table line parser.
//!
//! Input is the text form of a linker symbol table, one symbol per line:
//! `<address_hex> <type_tag> <name> [ignored...]`. Header, footer and any
//! other malformed lines are skipped without error.

use super::schema::RawSymbol;
use crate::utils::config::is_rom_address;
use crate::utils::error::ParseError;
use log::{debug, info};
use std::num::IntErrorKind;
use std::path::Path;

/// Read a whole symbol table into memory
///
/// **Public** - entry point for file input
///
/// # Errors
/// * `ParseError::FileNotFound` - Nothing exists at `path`
/// * `ParseError::ReadFailed` - Any other I/O failure
pub fn read_symbol_file(path: impl AsRef<Path>) -> Result<String, ParseError> {
    let path = path.as_ref();

    debug!("Reading symbol table from: {}", path.display());

    std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            ParseError::FileNotFound(path.to_path_buf())
        } else {
            ParseError::ReadFailed {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}

/// Parse a hexadecimal address token
///
/// Accepts an optional `0x`/`0X` prefix. Returns `None` for anything that
/// is not a valid unsigned hex number. Values too wide for `u64` saturate
/// to `u64::MAX`, which keeps them above RAM_START.
pub fn parse_address(token: &str) -> Option<u64> {
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token);

    // Signed tokens are rejected outright, including a '+' that
    // from_str_radix would otherwise accept
    if digits.starts_with('+') {
        return None;
    }

    match u64::from_str_radix(digits, 16) {
        Ok(address) => Some(address),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Some(u64::MAX),
        Err(_) => None,
    }
}

/// Address of the first token on a line, if it parses
///
/// **Public** - shared with the size estimator's forward scan
pub fn leading_address(line: &str) -> Option<u64> {
    line.split_whitespace().next().and_then(parse_address)
}

/// Parse a single line into a ROM symbol
///
/// Returns `None` for blank lines, lines with fewer than three tokens,
/// unparseable addresses and addresses outside the ROM image.
pub fn parse_line(line_index: usize, line: &str) -> Option<RawSymbol> {
    let mut tokens = line.split_whitespace();
    let (address, type_tag, name) = (tokens.next()?, tokens.next()?, tokens.next()?);

    let address = parse_address(address)?;
    if !is_rom_address(address) {
        return None;
    }

    Some(RawSymbol {
        line_index,
        address,
        type_tag: type_tag.to_string(),
        name: name.to_string(),
    })
}

/// Parse every line of a symbol table, preserving line order
///
/// **Public** - main entry point for parsing
///
/// The returned symbols keep their source line index; size estimation
/// depends on it.
pub fn parse_symbol_table(lines: &[&str]) -> Vec<RawSymbol> {
    let symbols: Vec<RawSymbol> = lines
        .iter()
        .enumerate()
        .filter_map(|(index, line)| parse_line(index, line))
        .collect();

    info!(
        "Parsed {} ROM symbols from {} lines",
        symbols.len(),
        lines.len()
    );

    symbols
}
