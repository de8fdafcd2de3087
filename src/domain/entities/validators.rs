use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

use crate::entities::option_fields::OptionField;

/// `local@domain.tld`, no whitespace and a single `@` per side.
pub static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(new_validation_error("blank", "Cannot be empty"));
    }
    Ok(())
}

pub fn validate_email_address(email: &str) -> Result<(), ValidationError> {
    if !EMAIL_REGEX.is_match(email) {
        return Err(new_validation_error("invalid_email", "Invalid email format"));
    }
    Ok(())
}

/// A patch field that is present must not be `null` or blank.
pub fn validate_patch_text(value: &OptionField<String>) -> Result<(), ValidationError> {
    match value {
        OptionField::Unchanged => Ok(()),
        OptionField::SetToNull => Err(null_not_allowed()),
        OptionField::SetToValue(text) => validate_not_blank(text),
    }
}

pub fn validate_patch_bool(value: &OptionField<bool>) -> Result<(), ValidationError> {
    if value.is_set_to_null() {
        return Err(null_not_allowed());
    }
    Ok(())
}

pub fn null_not_allowed() -> ValidationError {
    new_validation_error("null", "Cannot be null")
}

pub fn new_validation_error(code: &'static str, msg: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(msg));
    err
}
