//! Memory map and report layout constants.
//!
//! Values match the Mega Drive memory map. Report output depends on them,
//! so changing any of these changes the rendered report.

/// First byte of cartridge ROM
pub const ROM_START: u64 = 0x000000;

/// End of the addressable ROM window (4 MiB, exclusive)
pub const ROM_END: u64 = 0x400000;

/// Work RAM starts here; nothing at or above it is part of the image
pub const RAM_START: u64 = 0xE00000;

/// Inferred sizes at or above this are estimation artifacts (10 MiB)
pub const MAX_SYMBOL_SIZE: u64 = 10 * 1024 * 1024;

/// Symbols of this size or smaller are noise and never reported
pub const NOISE_FLOOR: u64 = 16;

/// Suffix of pseudo-symbols whose value is a byte count, not an address
pub const SIZE_SUFFIX: &str = "_size";

/// Symbol table read when no path is given on the command line
pub const DEFAULT_SYMBOL_FILE: &str = "symbol.txt";

/// Width of the section rules in the text report
pub const REPORT_WIDTH: usize = 100;

/// One bar cell per this many percent of the total
pub const BAR_SCALE: f64 = 2.0;

/// Current JSON report schema version
pub const REPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Check whether an address lies inside the static ROM image
pub fn is_rom_address(address: u64) -> bool {
    (ROM_START..ROM_END.min(RAM_START)).contains(&address)
}
