//! Common utility functions for invoice calculations.
//!
//! This module provides the rounding rule and tax rate shared by the totals
//! engine and the preview layer.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// New Zealand GST rate applied to the invoice subtotal.
pub const GST_RATE: Decimal = dec!(0.15);

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded away from zero, so every displayed
/// monetary value goes through the same rule.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use invoice_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(25.504)), dec!(25.50));
/// assert_eq!(round_half_up(dec!(25.505)), dec!(25.51));
/// assert_eq!(round_half_up(dec!(-25.505)), dec!(-25.51)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// `a × b`, clamped to the representable range instead of overflowing.
///
/// Logs a warning when the product had to be clamped, since the figure shown
/// is then no longer the true product.
pub fn mul_saturating(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    a.checked_mul(b).unwrap_or_else(|| {
        tracing::warn!(%a, %b, "amount too large; product clamped");
        a.saturating_mul(b)
    })
}

/// `a + b`, clamped to the representable range instead of overflowing.
pub fn add_saturating(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    a.checked_add(b).unwrap_or_else(|| {
        tracing::warn!(%a, %b, "amount too large; sum clamped");
        a.saturating_add(b)
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn round_half_up_rounds_down_below_midpoint() {
        assert_eq!(round_half_up(dec!(172.494)), dec!(172.49));
    }

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        assert_eq!(round_half_up(dec!(0.015)), dec!(0.02));
    }

    #[test]
    fn round_half_up_handles_negative_values() {
        assert_eq!(round_half_up(dec!(-0.015)), dec!(-0.02));
    }

    #[test]
    fn round_half_up_preserves_whole_amounts() {
        assert_eq!(round_half_up(dec!(100)), dec!(100.00));
    }

    #[test]
    fn round_half_up_handles_small_values() {
        assert_eq!(round_half_up(dec!(0.004)), dec!(0.00));
    }

    #[test]
    fn gst_rate_is_fifteen_percent() {
        assert_eq!(GST_RATE * dec!(100), dec!(15));
    }

    #[test]
    fn mul_saturating_matches_plain_product_in_range() {
        assert_eq!(mul_saturating(dec!(2.5), dec!(80)), dec!(200));
        assert_eq!(mul_saturating(dec!(-3), dec!(4)), dec!(-12));
    }

    #[test]
    fn mul_saturating_clamps_on_overflow() {
        let big = dec!(1000000000000000);

        assert_eq!(mul_saturating(big, big), Decimal::MAX);
        assert_eq!(mul_saturating(-big, big), Decimal::MIN);
    }

    #[test]
    fn add_saturating_clamps_on_overflow() {
        assert_eq!(add_saturating(Decimal::MAX, dec!(1)), Decimal::MAX);
        assert_eq!(add_saturating(Decimal::MIN, dec!(-1)), Decimal::MIN);
        assert_eq!(add_saturating(dec!(0.10), dec!(0.20)), dec!(0.30));
    }
}
