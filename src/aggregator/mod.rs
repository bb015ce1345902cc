//! Size estimation, classification and aggregation of parsed symbols.
//!
//! This module transforms parser output into:
//! - Sized symbols (gap to the next higher address)
//! - Categorized, reportable symbols
//! - Per-category totals and a size ranking

pub mod classifier;
pub mod metrics;
pub mod size_estimator;

// Re-export main types and functions
pub use classifier::{classify, classify_symbols, is_reportable};
pub use metrics::{calculate_category_usage, percentage, rank_symbols, to_report, total_size};
pub use size_estimator::{estimate_size, estimate_sizes, LineAddresses};
