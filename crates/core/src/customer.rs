//! Customer input rules.
//!
//! Column widths match the `customer` table (`VARCHAR(45)` names,
//! `VARCHAR(50)` email).

use validator::ValidateEmail;

use crate::error::CoreError;

/// Maximum length of `first_name` / `last_name`.
pub const MAX_NAME_LEN: usize = 45;

/// Maximum length of `email`.
pub const MAX_EMAIL_LEN: usize = 50;

/// Validate a customer name field. `field` is used in the error message.
pub fn validate_name(field: &str, value: &str) -> Result<(), CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    if trimmed.chars().count() > MAX_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "{field} must be at most {MAX_NAME_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate an email address for storage.
pub fn validate_email(value: &str) -> Result<(), CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation("email must not be empty".to_string()));
    }
    if trimmed.chars().count() > MAX_EMAIL_LEN {
        return Err(CoreError::Validation(format!(
            "email must be at most {MAX_EMAIL_LEN} characters"
        )));
    }
    if !trimmed.validate_email() {
        return Err(CoreError::Validation(format!(
            "'{trimmed}' is not a valid email address"
        )));
    }
    Ok(())
}

/// Canonical stored form of an email: trimmed and lowercased.
pub fn normalize_email(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Canonical stored form of a name: surrounding whitespace removed.
pub fn normalize_name(value: &str) -> String {
    value.trim().to_string()
}
