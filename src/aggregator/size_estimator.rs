//! Infer symbol sizes from the gaps between addresses.
//!
//! The symbol table only gives start addresses. A symbol's size is the
//! distance to the next line (in table order, not address order) that
//! carries a higher address. Table order stands in for layout order, so
//! symbols must never be re-sorted before this stage.

use crate::parser::schema::{RawSymbol, SizedSymbol};
use crate::parser::symbol_table::leading_address;
use crate::utils::config::{MAX_SYMBOL_SIZE, RAM_START, SIZE_SUFFIX};
use log::{debug, info};

/// Leading address of every raw line, parsed once
///
/// The forward scan looks at raw lines, including ones the parser dropped,
/// so it needs its own view of the table.
#[derive(Debug, Clone)]
pub struct LineAddresses {
    addresses: Vec<Option<u64>>,
}

impl LineAddresses {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            addresses: lines.iter().map(|line| leading_address(line)).collect(),
        }
    }

    /// Size implied by the next higher address after `line_index`
    ///
    /// Returns 0 when the scan reaches RAM or the end of the table first.
    pub fn scan_size(&self, line_index: usize, address: u64) -> u64 {
        let following = self.addresses.iter().skip(line_index + 1).flatten();

        for &next_address in following {
            if next_address >= RAM_START {
                break;
            }
            if next_address > address {
                return next_address - address;
            }
        }

        0
    }
}

/// Estimate the size of one symbol
///
/// `*_size` pseudo-symbols hold a byte count in their address field, which
/// replaces whatever the scan found.
pub fn estimate_size(addresses: &LineAddresses, symbol: &RawSymbol) -> u64 {
    if symbol.name.ends_with(SIZE_SUFFIX) {
        return symbol.address;
    }
    addresses.scan_size(symbol.line_index, symbol.address)
}

/// Check an inferred size is usable
///
/// Zero means no neighbour was found; anything at or above the cap is an
/// estimation artifact.
pub fn is_plausible_size(size: u64) -> bool {
    size > 0 && size < MAX_SYMBOL_SIZE
}

/// Attach sizes to parsed symbols and drop implausible ones
///
/// **Public** - main entry point for size estimation
///
/// # Arguments
/// * `lines` - The full symbol table, in original order
/// * `symbols` - Parser output for the same lines
///
/// # Returns
/// Sized symbols in the same order as `symbols`
pub fn estimate_sizes(lines: &[&str], symbols: Vec<RawSymbol>) -> Vec<SizedSymbol> {
    let addresses = LineAddresses::new(lines);
    let candidates = symbols.len();

    let sized: Vec<SizedSymbol> = symbols
        .into_iter()
        .filter_map(|symbol| {
            let size = estimate_size(&addresses, &symbol);
            if !is_plausible_size(size) {
                debug!("Dropping {} (estimated size {})", symbol.name, size);
                return None;
            }
            Some(SizedSymbol {
                address: symbol.address,
                type_tag: symbol.type_tag,
                name: symbol.name,
                size,
            })
        })
        .collect();

    info!("Sized {} of {} candidate symbols", sized.len(), candidates);

    sized
}
