//! Invoice totals.
//!
//! Totals are a pure function of the item list and the GST setting. They are
//! recomputed on every change instead of being kept as a running figure, so
//! calling [`compute_totals`] twice on the same inputs always gives the same
//! answer.
//!
//! | Line     | GST included                          | GST excluded       |
//! |----------|---------------------------------------|--------------------|
//! | Subtotal | round(Σ amounts)                      | round(Σ amounts)   |
//! | GST      | round(Σ amounts × 15%)                | 0.00               |
//! | Total    | Subtotal + GST                        | Subtotal           |
//!
//! GST is taken from the unrounded sum. Adding the two rounded lines for the
//! total keeps `subtotal + gst == total` exact on the printed invoice; for any
//! whole-cent subtotal it is also `round(Σ amounts × 1.15)`.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use invoice_core::{GstInclusion, InvoiceItem, ItemCollection, compute_totals};
//!
//! let items: ItemCollection = [
//!     InvoiceItem::generic("Design", dec!(2), dec!(25)),
//!     InvoiceItem::generic("Build", dec!(3), dec!(40)),
//! ]
//! .into_iter()
//! .collect();
//!
//! let totals = compute_totals(&items, GstInclusion::Included);
//!
//! assert_eq!(totals.subtotal, dec!(170.00));
//! assert_eq!(totals.gst, dec!(25.50));
//! assert_eq!(totals.total, dec!(195.50));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::common::{GST_RATE, add_saturating, mul_saturating, round_half_up};
use crate::models::{InvoiceItem, ItemCollection};

/// Whether GST is added to the invoice. Defaults to included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GstInclusion {
    #[default]
    Included,
    Excluded,
}

impl GstInclusion {
    pub fn is_included(&self) -> bool {
        matches!(self, Self::Included)
    }

    /// The other state.
    pub fn toggled(&self) -> Self {
        match self {
            Self::Included => Self::Excluded,
            Self::Excluded => Self::Included,
        }
    }
}

impl From<bool> for GstInclusion {
    fn from(included: bool) -> Self {
        if included { Self::Included } else { Self::Excluded }
    }
}

impl From<GstInclusion> for bool {
    fn from(inclusion: GstInclusion) -> Self {
        inclusion.is_included()
    }
}

/// Rounded totals for display. Never stored; derive again after any change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Totals {
    pub subtotal: Decimal,
    pub gst: Decimal,
    pub total: Decimal,
}

/// Sum of item amounts at full precision, clamped at the representable range.
pub fn raw_subtotal<'a>(items: impl IntoIterator<Item = &'a InvoiceItem>) -> Decimal {
    items
        .into_iter()
        .map(InvoiceItem::amount)
        .fold(Decimal::ZERO, add_saturating)
}

/// Computes subtotal, GST and total for `items`.
///
/// Never fails: blank or invalid fields were already coerced to zero when the
/// items were built, an empty list totals zero, and figures too large to
/// represent are clamped to `Decimal::MAX` (or `MIN`).
pub fn compute_totals(
    items: &ItemCollection,
    gst: GstInclusion,
) -> Totals {
    let raw = raw_subtotal(items);
    let subtotal = round_half_up(raw);
    let gst = match gst {
        GstInclusion::Included => round_half_up(mul_saturating(raw, GST_RATE)),
        GstInclusion::Excluded => Decimal::ZERO,
    };

    Totals {
        subtotal,
        gst,
        total: add_saturating(subtotal, gst),
    }
}
