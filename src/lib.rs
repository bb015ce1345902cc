//! ROM Usage Report
//!
//! Estimates how much of a Mega Drive ROM image each linker symbol takes
//! and groups symbols into content categories (sprites, tilesets, audio,
//! code, ...).
//!
//! The pipeline runs in four stages, each a plain function over the
//! previous stage's output:
//!
//! 1. [`parser`] - extract ROM symbols from the symbol table text
//! 2. [`aggregator::size_estimator`] - infer sizes from address gaps
//! 3. [`aggregator::classifier`] - drop noise and assign categories
//! 4. [`output`] - render the ranked report
//!
//! ```bash
//! rom-usage symbol.txt
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
