use serde::{Deserialize, Serialize};

use super::invoice_details::DEFAULT_PAYMENT_TERMS_DAYS;
use crate::format::DEFAULT_CURRENCY_SYMBOL;

/// Presentation settings. Every field falls back to the NZ defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvoiceSettings {
    pub currency_symbol: String,
    pub payment_terms_days: u32,
    pub invoice_prefix: String,
}

impl Default for InvoiceSettings {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            payment_terms_days: DEFAULT_PAYMENT_TERMS_DAYS,
            invoice_prefix: "INV".to_string(),
        }
    }
}
