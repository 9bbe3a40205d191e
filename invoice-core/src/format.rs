//! Coercion of raw form text into numbers and dates, and the display
//! formatting used for every value that leaves the core.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::calculations::common::round_half_up;

/// Currency symbol used when no settings override it.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// Placeholder for a table cell that does not apply to an item's kind.
pub const NOT_APPLICABLE: &str = "—";

/// Normalizes input for decimal parsing: trims whitespace, drops a leading
/// `$` and removes commas (thousands separator).
fn normalize_decimal_input(s: &str) -> String {
    let trimmed = s.trim();
    let (sign, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => ("-", rest.trim_start()),
        None => ("", trimmed),
    };
    let rest = rest.strip_prefix(DEFAULT_CURRENCY_SYMBOL).unwrap_or(rest);
    format!("{sign}{}", rest.trim().replace(',', ""))
}

/// Coerces a raw form value into a [`Decimal`].
///
/// Empty or whitespace-only input is treated as 0. Input that is not a number
/// also yields 0 so that a half-typed field never halts the totals; a warning
/// is logged. Negative values keep their sign.
pub fn parse_amount(s: &str) -> Decimal {
    let normalized = normalize_decimal_input(s);
    if normalized.is_empty() || normalized == "-" {
        return Decimal::ZERO;
    }
    normalized
        .parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(&normalized))
        .unwrap_or_else(|e| {
            tracing::warn!(input = %s, "non-numeric amount treated as zero: {}", e);
            Decimal::ZERO
        })
}

/// Parses an ISO `YYYY-MM-DD` date as produced by a date input.
///
/// Returns `None` for blank input, or when parsing fails (logs a warning).
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_or_else(
        |e| {
            tracing::warn!(input = %s, "invalid date ignored: {}", e);
            None
        },
        Some,
    )
}

/// Formats a monetary amount as `$172.50`.
pub fn format_currency(amount: Decimal) -> String {
    format_currency_with(DEFAULT_CURRENCY_SYMBOL, amount)
}

/// Formats a monetary amount with an explicit currency symbol. The sign goes
/// in front of the symbol (`-$5.00`).
pub fn format_currency_with(
    symbol: &str,
    amount: Decimal,
) -> String {
    let rounded = round_half_up(amount);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-{symbol}{:.2}", rounded.abs())
    } else {
        format!("{symbol}{:.2}", rounded.abs())
    }
}

/// Formats a quantity or hour count without trailing zeros (`2.5`, `10`).
pub fn format_quantity(value: Decimal) -> String {
    value.normalize().to_string()
}

/// Formats a date the way the printed invoice shows it: `1 January 2026`.
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%-d %B %Y").to_string()
}
