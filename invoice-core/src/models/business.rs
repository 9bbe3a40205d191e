use serde::{Deserialize, Serialize};

use super::validation::{ValidationError, into_result, require};

/// The invoicing business as shown in the invoice header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessDetails {
    pub name: String,
    pub gst_number: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub address: String,
}

impl BusinessDetails {
    /// Name, email and address are required; GST number and phone are not.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        self.collect_errors(&mut errors);
        into_result(errors)
    }

    pub(crate) fn collect_errors(
        &self,
        errors: &mut Vec<ValidationError>,
    ) {
        require(errors, "Business/Trading Name", &self.name);
        require(errors, "Email", &self.email);
        require(errors, "Business Address", &self.address);
    }
}

/// Account the client pays into. NZ banks check that the account name
/// matches the account, so it is printed exactly as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BankDetails {
    pub bank_name: String,
    pub account_name: String,
    pub account_number: String,
}

impl BankDetails {
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        self.collect_errors(&mut errors);
        into_result(errors)
    }

    pub(crate) fn collect_errors(
        &self,
        errors: &mut Vec<ValidationError>,
    ) {
        require(errors, "Bank Name", &self.bank_name);
        require(errors, "Account Name", &self.account_name);
        require(errors, "Account Number", &self.account_number);
    }
}

/// Business and bank details, saved and cleared together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessProfile {
    pub business: BusinessDetails,
    pub bank: BankDetails,
}

impl BusinessProfile {
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        self.collect_errors(&mut errors);
        into_result(errors)
    }

    pub(crate) fn collect_errors(
        &self,
        errors: &mut Vec<ValidationError>,
    ) {
        self.business.collect_errors(errors);
        self.bank.collect_errors(errors);
    }
}
