use thiserror::Error;

/// A record failed the form's "required" contract.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is empty or whitespace.
    #[error("{0} is required")]
    Required(&'static str),
}

/// Pushes [`ValidationError::Required`] when `value` is blank.
pub(crate) fn require(
    errors: &mut Vec<ValidationError>,
    field: &'static str,
    value: &str,
) {
    if value.trim().is_empty() {
        errors.push(ValidationError::Required(field));
    }
}

pub(crate) fn into_result(errors: Vec<ValidationError>) -> Result<(), Vec<ValidationError>> {
    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn required_error_names_field() {
        assert_eq!(
            ValidationError::Required("Client Name").to_string(),
            "Client Name is required"
        );
    }

    #[test]
    fn require_treats_whitespace_as_missing() {
        let mut errors = Vec::new();

        require(&mut errors, "Email", "   ");
        require(&mut errors, "Address", "1 Queen St");

        assert_eq!(errors, vec![ValidationError::Required("Email")]);
    }
}
