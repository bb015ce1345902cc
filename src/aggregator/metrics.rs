//! Calculate usage totals and rankings from categorized symbols.
//!
//! Ties keep first-appearance order: categories in the order their first
//! symbol appears in the table, symbols in table order.

use crate::parser::schema::{CategoryUsage, Symbol, UsageReport};
use crate::utils::config::REPORT_SCHEMA_VERSION;
use chrono::Utc;
use log::debug;

/// Sum of all symbol sizes
pub fn total_size(symbols: &[Symbol]) -> u64 {
    symbols.iter().map(|s| s.size).sum()
}

/// Share of `total` taken by `part`, in percent
///
/// Returns 0 when `total` is 0.
pub fn percentage(part: u64, total: u64) -> f64 {
    if total > 0 {
        (part as f64 / total as f64) * 100.0
    } else {
        0.0
    }
}

/// Calculate per-category totals, largest first
///
/// **Public** - main entry point for category metrics
///
/// Categories without members are omitted.
pub fn calculate_category_usage(symbols: &[Symbol]) -> Vec<CategoryUsage> {
    let total = total_size(symbols);
    let mut usage: Vec<CategoryUsage> = Vec::new();

    for symbol in symbols {
        match usage.iter().position(|u| u.category == symbol.category) {
            Some(index) => {
                usage[index].size += symbol.size;
                usage[index].symbol_count += 1;
            }
            None => usage.push(CategoryUsage {
                category: symbol.category,
                label: symbol.category.group_label().to_string(),
                size: symbol.size,
                percentage: 0.0,
                symbol_count: 1,
            }),
        }
    }

    usage.retain(|u| u.size > 0);
    for entry in &mut usage {
        entry.percentage = percentage(entry.size, total);
    }

    // Stable sort keeps first-appearance order for equal totals
    usage.sort_by(|a, b| b.size.cmp(&a.size));

    debug!("Computed usage for {} categories", usage.len());

    usage
}

/// Rank symbols by size, largest first
pub fn rank_symbols(symbols: &[Symbol]) -> Vec<Symbol> {
    let mut ranked = symbols.to_vec();
    ranked.sort_by(|a, b| b.size.cmp(&a.size));
    ranked
}

/// Assemble the final report from categorized symbols
///
/// **Public** - used by commands to create final output
pub fn to_report(source: &str, symbols: &[Symbol]) -> UsageReport {
    UsageReport {
        version: REPORT_SCHEMA_VERSION.to_string(),
        source: source.to_string(),
        total_size: total_size(symbols),
        symbol_count: symbols.len(),
        categories: calculate_category_usage(symbols),
        symbols: rank_symbols(symbols),
        generated_at: Utc::now().to_rfc3339(),
    }
}
