//! Invoice line items.
//!
//! An item is billed either by quantity × unit price ([`ItemKind::Generic`])
//! or by hours × rate on a given date ([`ItemKind::Hourly`]). The amount is
//! never stored: [`InvoiceItem::amount`] derives it from whichever pricing is
//! active, so it cannot drift from its inputs.
//!
//! Switching an item's kind keeps the pricing that was active before the
//! switch, so switching back restores what the user typed.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use invoice_core::{InvoiceItem, ItemKind};
//!
//! let mut item = InvoiceItem::generic("Consulting", dec!(2), dec!(25));
//! assert_eq!(item.amount(), dec!(50));
//!
//! item.switch_kind(ItemKind::Hourly);
//! item.set_hours(dec!(2.5));
//! item.set_rate(dec!(80));
//! assert_eq!(item.amount(), dec!(200.0));
//!
//! item.switch_kind(ItemKind::Generic);
//! assert_eq!(item.amount(), dec!(50));
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calculations::common::mul_saturating;
use crate::format::{parse_amount, parse_date};

/// Error returned when a string does not name an item kind.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown item kind '{0}'; expected 'generic' or 'hourly'")]
pub struct ParseItemKindError(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    #[default]
    Generic,
    Hourly,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::Hourly => "hourly",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemKind {
    type Err = ParseItemKindError;

    /// Case-insensitive. Blank input means generic, which is what a new
    /// form row starts as.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "generic" => Ok(Self::Generic),
            "hourly" => Ok(Self::Hourly),
            _ => Err(ParseItemKindError(s.to_string())),
        }
    }
}

/// The numeric inputs of one item, shaped by its kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Pricing {
    Generic {
        quantity: Decimal,
        unit_price: Decimal,
    },
    Hourly {
        date: Option<NaiveDate>,
        hours: Decimal,
        rate: Decimal,
    },
}

impl Pricing {
    pub fn kind(&self) -> ItemKind {
        match self {
            Self::Generic { .. } => ItemKind::Generic,
            Self::Hourly { .. } => ItemKind::Hourly,
        }
    }

    /// `quantity × unit_price` or `hours × rate`, unrounded. A product too
    /// large to represent is clamped rather than overflowing.
    pub fn amount(&self) -> Decimal {
        match *self {
            Self::Generic {
                quantity,
                unit_price,
            } => mul_saturating(quantity, unit_price),
            Self::Hourly { hours, rate, .. } => mul_saturating(hours, rate),
        }
    }

    /// Blank pricing for a freshly switched-to kind.
    fn empty(kind: ItemKind) -> Self {
        match kind {
            ItemKind::Generic => Self::Generic {
                quantity: Decimal::ZERO,
                unit_price: Decimal::ZERO,
            },
            ItemKind::Hourly => Self::Hourly {
                date: None,
                hours: Decimal::ZERO,
                rate: Decimal::ZERO,
            },
        }
    }
}

/// One billable line on the invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceItem {
    description: String,
    pricing: Pricing,
    /// Pricing of the other kind, kept across a kind switch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    retained: Option<Pricing>,
}

impl Default for InvoiceItem {
    /// The row a new invoice form starts with: generic, quantity 1, no price.
    fn default() -> Self {
        Self::generic("", Decimal::ONE, Decimal::ZERO)
    }
}

impl InvoiceItem {
    pub fn generic(
        description: impl Into<String>,
        quantity: Decimal,
        unit_price: Decimal,
    ) -> Self {
        Self {
            description: description.into(),
            pricing: Pricing::Generic {
                quantity,
                unit_price,
            },
            retained: None,
        }
    }

    pub fn hourly(
        date: Option<NaiveDate>,
        description: impl Into<String>,
        hours: Decimal,
        rate: Decimal,
    ) -> Self {
        Self {
            description: description.into(),
            pricing: Pricing::Hourly { date, hours, rate },
            retained: None,
        }
    }

    /// Builds a generic item from raw form text. Non-numeric fields count as 0.
    pub fn generic_from_input(
        description: &str,
        quantity: &str,
        unit_price: &str,
    ) -> Self {
        Self::generic(description, parse_amount(quantity), parse_amount(unit_price))
    }

    /// Builds an hourly item from raw form text. Non-numeric fields count as 0
    /// and an unreadable date is left empty.
    pub fn hourly_from_input(
        date: &str,
        description: &str,
        hours: &str,
        rate: &str,
    ) -> Self {
        Self::hourly(
            parse_date(date),
            description,
            parse_amount(hours),
            parse_amount(rate),
        )
    }

    pub fn kind(&self) -> ItemKind {
        self.pricing.kind()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn pricing(&self) -> &Pricing {
        &self.pricing
    }

    /// The line amount at full precision. Rounding happens at display time.
    pub fn amount(&self) -> Decimal {
        self.pricing.amount()
    }

    /// Changes the item's kind in place.
    ///
    /// The current pricing is retained and any pricing retained from an
    /// earlier switch to `kind` is restored; otherwise the new kind starts
    /// with zeros. Switching to the current kind does nothing.
    pub fn switch_kind(
        &mut self,
        kind: ItemKind,
    ) {
        if self.kind() == kind {
            return;
        }
        let next = match self.retained.take() {
            Some(retained) if retained.kind() == kind => retained,
            _ => Pricing::empty(kind),
        };
        self.retained = Some(std::mem::replace(&mut self.pricing, next));
    }

    pub fn set_description(
        &mut self,
        description: impl Into<String>,
    ) {
        self.description = description.into();
    }

    /// Sets the quantity if the item is generic. Returns `false` otherwise.
    pub fn set_quantity(
        &mut self,
        value: Decimal,
    ) -> bool {
        match &mut self.pricing {
            Pricing::Generic { quantity, .. } => {
                *quantity = value;
                true
            }
            Pricing::Hourly { .. } => false,
        }
    }

    /// Sets the unit price if the item is generic. Returns `false` otherwise.
    pub fn set_unit_price(
        &mut self,
        value: Decimal,
    ) -> bool {
        match &mut self.pricing {
            Pricing::Generic { unit_price, .. } => {
                *unit_price = value;
                true
            }
            Pricing::Hourly { .. } => false,
        }
    }

    /// Sets the work date if the item is hourly. Returns `false` otherwise.
    pub fn set_date(
        &mut self,
        value: Option<NaiveDate>,
    ) -> bool {
        match &mut self.pricing {
            Pricing::Hourly { date, .. } => {
                *date = value;
                true
            }
            Pricing::Generic { .. } => false,
        }
    }

    /// Sets the hours if the item is hourly. Returns `false` otherwise.
    pub fn set_hours(
        &mut self,
        value: Decimal,
    ) -> bool {
        match &mut self.pricing {
            Pricing::Hourly { hours, .. } => {
                *hours = value;
                true
            }
            Pricing::Generic { .. } => false,
        }
    }

    /// Sets the hourly rate if the item is hourly. Returns `false` otherwise.
    pub fn set_rate(
        &mut self,
        value: Decimal,
    ) -> bool {
        match &mut self.pricing {
            Pricing::Hourly { rate, .. } => {
                *rate = value;
                true
            }
            Pricing::Generic { .. } => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn jan(day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(2026, 1, day)
    }

    // =========================================================================
    // ItemKind tests
    // =========================================================================

    #[test]
    fn item_kind_parses_case_insensitively() {
        assert_eq!("Hourly".parse::<ItemKind>(), Ok(ItemKind::Hourly));
        assert_eq!(" GENERIC ".parse::<ItemKind>(), Ok(ItemKind::Generic));
    }

    #[test]
    fn item_kind_blank_is_generic() {
        assert_eq!("".parse::<ItemKind>(), Ok(ItemKind::Generic));
    }

    #[test]
    fn item_kind_rejects_unknown_names() {
        assert_eq!(
            "daily".parse::<ItemKind>(),
            Err(ParseItemKindError("daily".to_string()))
        );
    }

    // =========================================================================
    // amount tests
    // =========================================================================

    #[test]
    fn generic_amount_is_quantity_times_unit_price() {
        let item = InvoiceItem::generic("Development Work", dec!(20), dec!(175.00));

        assert_eq!(item.amount(), dec!(3500.00));
    }

    #[test]
    fn hourly_amount_is_hours_times_rate() {
        let item = InvoiceItem::hourly(jan(12), "Site visit", dec!(4), dec!(120));

        assert_eq!(item.amount(), dec!(480));
    }

    #[test]
    fn hourly_amount_accepts_decimal_hours() {
        let item = InvoiceItem::hourly(None, "Support", dec!(2.5), dec!(80));

        assert_eq!(item.amount(), dec!(200.0));
    }

    #[test]
    fn amount_is_not_rounded() {
        let item = InvoiceItem::generic("Widgets", dec!(3), dec!(0.333));

        assert_eq!(item.amount(), dec!(0.999));
    }

    #[test]
    fn zero_inputs_give_zero_amount() {
        assert_eq!(InvoiceItem::generic("Free", dec!(1), dec!(0)).amount(), Decimal::ZERO);
        assert_eq!(InvoiceItem::hourly(None, "Idle", dec!(0), dec!(90)).amount(), Decimal::ZERO);
    }

    #[test]
    fn negative_inputs_follow_arithmetic_sign() {
        let item = InvoiceItem::generic("Credit", dec!(1), dec!(-40));

        assert_eq!(item.amount(), dec!(-40));
    }

    #[test]
    fn default_item_is_single_unpriced_generic_row() {
        let item = InvoiceItem::default();

        assert_eq!(item.kind(), ItemKind::Generic);
        assert_eq!(item.description(), "");
        assert_eq!(
            item.pricing(),
            &Pricing::Generic {
                quantity: dec!(1),
                unit_price: dec!(0)
            }
        );
        assert_eq!(item.amount(), Decimal::ZERO);
    }

    // =========================================================================
    // raw input tests
    // =========================================================================

    #[test]
    fn from_input_coerces_blank_and_invalid_fields_to_zero() {
        let item = InvoiceItem::generic_from_input("Consulting", "10", "");
        assert_eq!(item.amount(), Decimal::ZERO);

        let item = InvoiceItem::hourly_from_input("not a date", "Call", "abc", "150");
        assert_eq!(item.amount(), Decimal::ZERO);
        assert_eq!(
            item.pricing(),
            &Pricing::Hourly {
                date: None,
                hours: Decimal::ZERO,
                rate: dec!(150)
            }
        );
    }

    #[test]
    fn from_input_reads_valid_fields() {
        let item = InvoiceItem::hourly_from_input("2026-01-12", "Call", "1.5", "150");

        assert_eq!(item.amount(), dec!(225.0));
        assert_eq!(
            item.pricing(),
            &Pricing::Hourly {
                date: jan(12),
                hours: dec!(1.5),
                rate: dec!(150)
            }
        );
    }

    // =========================================================================
    // switch_kind tests
    // =========================================================================

    #[test]
    fn switch_kind_rederives_amount_from_new_kind() {
        let mut item = InvoiceItem::generic("Consulting", dec!(10), dec!(150));

        item.switch_kind(ItemKind::Hourly);

        assert_eq!(item.kind(), ItemKind::Hourly);
        assert_eq!(item.amount(), Decimal::ZERO);
    }

    #[test]
    fn switch_kind_restores_previous_values_when_switching_back() {
        let mut item = InvoiceItem::generic("Consulting", dec!(10), dec!(150));
        item.switch_kind(ItemKind::Hourly);
        item.set_hours(dec!(3));
        item.set_rate(dec!(100));

        item.switch_kind(ItemKind::Generic);
        assert_eq!(item.amount(), dec!(1500));

        item.switch_kind(ItemKind::Hourly);
        assert_eq!(item.amount(), dec!(300));
    }

    #[test]
    fn switch_kind_to_same_kind_is_no_op() {
        let mut item = InvoiceItem::hourly(jan(5), "Audit", dec!(2), dec!(90));
        let before = item.clone();

        item.switch_kind(ItemKind::Hourly);

        assert_eq!(item, before);
    }

    #[test]
    fn switch_kind_keeps_description() {
        let mut item = InvoiceItem::generic("Monthly Service", dec!(1), dec!(1000));

        item.switch_kind(ItemKind::Hourly);

        assert_eq!(item.description(), "Monthly Service");
    }

    // =========================================================================
    // setter tests
    // =========================================================================

    #[test]
    fn setters_update_amount() {
        let mut item = InvoiceItem::default();

        assert!(item.set_quantity(dec!(3)));
        assert!(item.set_unit_price(dec!(40)));

        assert_eq!(item.amount(), dec!(120));
    }

    #[test]
    fn setters_for_other_kind_are_rejected() {
        let mut item = InvoiceItem::default();

        assert!(!item.set_hours(dec!(8)));
        assert!(!item.set_rate(dec!(50)));
        assert!(!item.set_date(jan(1)));
        assert_eq!(item.amount(), Decimal::ZERO);
    }

    #[test]
    fn oversized_amount_is_clamped_instead_of_overflowing() {
        let item = InvoiceItem::generic_from_input("Big", "1000000000000000", "100000000000000");

        assert_eq!(item.amount(), Decimal::MAX);
    }
}
