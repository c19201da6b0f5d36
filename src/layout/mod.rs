//! Page layout for span rendering.
//!
//! This module handles:
//! - Mapping page-local row positions onto a virtualized dataset
//! - Computing spans for every cell of a rendered page
//! - Turning spans into merge ranges a renderer can draw

mod span_grid;
mod viewport;

pub use span_grid::{MergeInfo, MergeRange, SpanGrid};
pub use viewport::{ViewportWindow, VirtualWindow};
