//! Plain-text usage report.
//!
//! Layout is fixed-width so reports from different builds can be diffed.

use crate::parser::schema::UsageReport;
use crate::utils::config::{BAR_SCALE, REPORT_WIDTH};

/// Bar cell for the category breakdown
const BAR_CELL: char = '█';

/// Render a report as text
///
/// **Public** - main entry point for text output
///
/// # Arguments
/// * `report` - Report to render
/// * `top` - Optional cap on ranked symbols; `None` lists every symbol
pub fn render_report(report: &UsageReport, top: Option<usize>) -> String {
    let mut lines = Vec::new();

    push_section(&mut lines, '=', "📈 MEMORY USAGE SUMMARY");
    lines.push(String::new());
    lines.push(format!(
        "✅ Total symbols: {}",
        format_thousands(report.symbol_count as u64)
    ));
    lines.push(format!(
        "💾 Total memory: {} bytes ({:.2} KB)",
        format_thousands(report.total_size),
        to_kib(report.total_size)
    ));
    lines.push(String::new());

    push_section(&mut lines, '-', "🏆 USAGE BY CATEGORY");
    lines.push(String::new());
    for usage in &report.categories {
        lines.push(format!(
            "{:<20} {:<30} {:>7.2} KB ({:>5.2}%) - {:>4} symbols",
            usage.label,
            usage_bar(usage.percentage),
            to_kib(usage.size),
            usage.percentage,
            usage.symbol_count
        ));
    }

    lines.push(String::new());
    push_section(&mut lines, '-', "🔝 TOP MEMORY-CONSUMING SYMBOLS");
    lines.push(String::new());
    let limit = top.unwrap_or(report.symbols.len());
    for (rank, symbol) in report.symbols.iter().take(limit).enumerate() {
        lines.push(format!(
            "{:>2}. {:<65} {:<10}{:>8.2} KB",
            rank + 1,
            symbol.name,
            symbol.category.label(),
            to_kib(symbol.size)
        ));
    }

    lines.join("\n")
}

/// Heading line for the report, printed before the table is read
pub fn analyzing_banner(source: &str) -> String {
    format!("\n📊 Analyzing {}...\n", source)
}

fn push_section(lines: &mut Vec<String>, rule: char, title: &str) {
    let rule = rule.to_string().repeat(REPORT_WIDTH);
    lines.push(rule.clone());
    lines.push(title.to_string());
    lines.push(rule);
}

/// Proportional bar: one cell per `BAR_SCALE` percent, truncated
pub fn usage_bar(percentage: f64) -> String {
    let cells = (percentage / BAR_SCALE) as usize;
    BAR_CELL.to_string().repeat(cells)
}

fn to_kib(bytes: u64) -> f64 {
    bytes as f64 / 1024.0
}

/// Format an integer with comma thousands separators
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}
