//! Invoice arithmetic.
//!
//! Line amounts are summed at full decimal precision and only rounded to
//! cents when a value leaves this module for display.

pub mod columns;
pub mod common;
pub mod totals;

pub use columns::{Column, ColumnSet, select_columns};
pub use common::{GST_RATE, round_half_up};
pub use totals::{GstInclusion, Totals, compute_totals};
