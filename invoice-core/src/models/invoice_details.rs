use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::validation::{ValidationError, into_result, require};
use crate::format::format_long_date;

/// Payment terms used when the invoice has no explicit due date.
pub const DEFAULT_PAYMENT_TERMS_DAYS: u32 = 30;

/// Header fields of one invoice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvoiceDetails {
    pub number: String,
    pub date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub period_start: Option<NaiveDate>,
    pub period_end: Option<NaiveDate>,
}

impl InvoiceDetails {
    /// Invoice number and date are required; due date and period are not.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        self.collect_errors(&mut errors);
        into_result(errors)
    }

    pub(crate) fn collect_errors(
        &self,
        errors: &mut Vec<ValidationError>,
    ) {
        require(errors, "Invoice Number", &self.number);
        if self.date.is_none() {
            errors.push(ValidationError::Required("Invoice Date"));
        }
    }

    /// The billing period line, or `None` when neither end is set.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use invoice_core::InvoiceDetails;
    ///
    /// let details = InvoiceDetails {
    ///     period_start: NaiveDate::from_ymd_opt(2026, 1, 1),
    ///     period_end: NaiveDate::from_ymd_opt(2026, 1, 31),
    ///     ..Default::default()
    /// };
    ///
    /// assert_eq!(
    ///     details.period_label().as_deref(),
    ///     Some("1 January 2026 to 31 January 2026")
    /// );
    /// ```
    pub fn period_label(&self) -> Option<String> {
        match (self.period_start, self.period_end) {
            (Some(start), Some(end)) => Some(format!(
                "{} to {}",
                format_long_date(start),
                format_long_date(end)
            )),
            (Some(start), None) => Some(format!("From {}", format_long_date(start))),
            (None, Some(end)) => Some(format!("Until {}", format_long_date(end))),
            (None, None) => None,
        }
    }

    /// The explicit due date, else the invoice date plus `terms_days`.
    pub fn effective_due_date(
        &self,
        terms_days: u32,
    ) -> Option<NaiveDate> {
        self.due_date
            .or_else(|| self.date.and_then(|date| default_due_date(date, terms_days)))
    }
}

/// `date` plus `terms_days`, or `None` past the end of the calendar.
pub fn default_due_date(
    date: NaiveDate,
    terms_days: u32,
) -> Option<NaiveDate> {
    date.checked_add_days(Days::new(u64::from(terms_days)))
}

/// Suggests an invoice number such as `INV-2026-001`.
pub fn suggest_invoice_number(
    prefix: &str,
    year: i32,
    sequence: u32,
) -> String {
    format!("{prefix}-{year}-{sequence:03}")
}
