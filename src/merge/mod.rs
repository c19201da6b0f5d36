//! Cell merging for table views.
//!
//! This module handles:
//! - Deciding, per rendered cell, whether it owns a span or is absorbed
//! - Row-direction runs across the full dataset, capped to the rendered window
//! - Column-direction runs across the live column list
//! - Memoizing results until the data or the window moves

mod cache;
mod calculator;

pub use cache::{CacheStats, MergeCache};
pub use calculator::{CellContext, SpanCalculator, TableView};
