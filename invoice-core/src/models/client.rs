use serde::{Deserialize, Serialize};

use super::validation::{ValidationError, into_result, require};

/// The party being invoiced. Saved clients are keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientDetails {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: String,
}

impl ClientDetails {
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        self.collect_errors(&mut errors);
        into_result(errors)
    }

    pub(crate) fn collect_errors(
        &self,
        errors: &mut Vec<ValidationError>,
    ) {
        require(errors, "Client Name", &self.name);
        require(errors, "Client Address", &self.address);
    }
}
