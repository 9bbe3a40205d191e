//! TOML configuration for a CLI run: presentation settings, the GST
//! preference and, optionally, the records needed to issue an invoice.
//!
//! ```toml
//! include_gst = true
//!
//! [settings]
//! currency_symbol = "$"
//! payment_terms_days = 20
//!
//! [business]
//! name = "Kiwi Consulting Ltd"
//! email = "accounts@kiwi.example"
//! address = "1 Queen Street, Auckland"
//!
//! [invoice]
//! number = "INV-2026-001"
//! date = "2026-01-31"
//! ```
//!
//! Every table is optional. Dates are quoted `YYYY-MM-DD` strings.

use std::path::Path;

use invoice_core::{
    BankDetails, BusinessDetails, BusinessProfile, ClientDetails, InvoiceDetails, InvoiceSettings,
};
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Stored GST preference. `None` leaves the store's value in place.
    pub include_gst: Option<bool>,
    pub settings: InvoiceSettings,
    pub business: Option<BusinessDetails>,
    pub bank: Option<BankDetails>,
    pub client: Option<ClientDetails>,
    pub invoice: Option<InvoiceDetails>,
}

impl AppConfig {
    /// The business profile, if either half of it is configured. A missing
    /// half is left blank so validation can name its fields.
    pub fn profile(&self) -> Option<BusinessProfile> {
        if self.business.is_none() && self.bank.is_none() {
            return None;
        }
        Some(BusinessProfile {
            business: self.business.clone().unwrap_or_default(),
            bank: self.bank.clone().unwrap_or_default(),
        })
    }

    /// True when any of the invoice records are present, meaning the run
    /// should issue a full invoice rather than a preview.
    pub fn has_records(&self) -> bool {
        self.business.is_some()
            || self.bank.is_some()
            || self.client.is_some()
            || self.invoice.is_some()
    }
}

pub fn load_from_str(input: &str) -> Result<AppConfig, ConfigError> {
    Ok(toml::from_str(input)?)
}

pub fn load_from_file(path: &Path) -> Result<AppConfig, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    load_from_str(&contents)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = load_from_str("").expect("empty TOML is valid");

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.settings.currency_symbol, "$");
        assert_eq!(config.settings.payment_terms_days, 30);
        assert!(!config.has_records());
        assert!(config.profile().is_none());
    }

    #[test]
    fn settings_and_preference_are_read() {
        let config = load_from_str(
            r#"
include_gst = false

[settings]
payment_terms_days = 14
"#,
        )
        .expect("should parse");

        assert_eq!(config.include_gst, Some(false));
        assert_eq!(config.settings.payment_terms_days, 14);
        assert_eq!(config.settings.invoice_prefix, "INV");
    }

    #[test]
    fn invoice_dates_parse_from_strings() {
        let config = load_from_str(
            r#"
[invoice]
number = "INV-2026-001"
date = "2026-01-31"
period_start = "2026-01-01"
"#,
        )
        .expect("should parse");

        let invoice = config.invoice.as_ref().expect("invoice table present");
        assert_eq!(invoice.number, "INV-2026-001");
        assert_eq!(invoice.date, NaiveDate::from_ymd_opt(2026, 1, 31));
        assert_eq!(invoice.period_start, NaiveDate::from_ymd_opt(2026, 1, 1));
        assert_eq!(invoice.period_end, None);
        assert!(config.has_records());
    }

    #[test]
    fn profile_fills_missing_half_with_blanks() {
        let config = load_from_str(
            r#"
[business]
name = "Kiwi Consulting Ltd"
"#,
        )
        .expect("should parse");

        let profile = config.profile().expect("business present");
        assert_eq!(profile.business.name, "Kiwi Consulting Ltd");
        assert_eq!(profile.bank, BankDetails::default());
    }

    #[test]
    fn malformed_date_is_a_parse_error() {
        let result = load_from_str(
            r#"
[invoice]
date = "31/01/2026"
"#,
        );

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
