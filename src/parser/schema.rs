//! Symbol data model and report schema.
//!
//! A symbol moves through three shapes as it flows down the pipeline:
//! [`RawSymbol`] (parsed), [`SizedSymbol`] (size inferred) and [`Symbol`]
//! (filtered and categorized). [`UsageReport`] is what the reporter consumes
//! and what the JSON writer serializes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Content category assigned to every reported symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Sprite,
    Tileset,
    Image,
    Map,
    Palette,
    Audio,
    Tilemap,
    #[serde(rename = "Font/Text")]
    FontText,
    Code,
    Other,
}

impl Category {
    /// Singular label used in the ranked symbol list
    pub fn label(&self) -> &'static str {
        match self {
            Category::Sprite => "Sprite",
            Category::Tileset => "Tileset",
            Category::Image => "Image",
            Category::Map => "Map",
            Category::Palette => "Palette",
            Category::Audio => "Audio",
            Category::Tilemap => "Tilemap",
            Category::FontText => "Font/Text",
            Category::Code => "Code",
            Category::Other => "Other",
        }
    }

    /// Plural label used in the category breakdown
    pub fn group_label(&self) -> &'static str {
        match self {
            Category::Sprite => "Sprites",
            Category::Tileset => "Tilesets",
            Category::Image => "Images",
            Category::Map => "Maps",
            Category::Palette => "Palettes",
            Category::Audio => "Audio",
            Category::Tilemap => "Tilemaps",
            Category::FontText => "Fonts/Text",
            Category::Code => "Code",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A symbol table line that passed parsing and the ROM region filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSymbol {
    /// Index of the source line in the original table
    pub line_index: usize,
    pub address: u64,
    pub type_tag: String,
    pub name: String,
}

/// A parsed symbol with its inferred byte size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizedSymbol {
    pub address: u64,
    pub type_tag: String,
    pub name: String,
    pub size: u64,
}

/// A reportable, categorized symbol
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    pub address: u64,
    #[serde(rename = "type")]
    pub type_tag: String,
    pub name: String,
    pub size: u64,
    pub category: Category,
}

/// Top-level report structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Symbol table the report was built from
    pub source: String,

    /// Sum of all reported symbol sizes in bytes
    pub total_size: u64,

    /// Number of reported symbols
    pub symbol_count: usize,

    /// Category breakdown, largest first
    pub categories: Vec<CategoryUsage>,

    /// Every reported symbol, largest first
    pub symbols: Vec<Symbol>,

    /// Timestamp when the report was generated
    pub generated_at: String,
}

/// Aggregate usage for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryUsage {
    pub category: Category,

    /// Plural group label, as printed in the text report
    pub label: String,

    /// Total bytes of the category's symbols
    pub size: u64,

    /// Share of the report total
    pub percentage: f64,

    pub symbol_count: usize,
}
