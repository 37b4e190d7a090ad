//! Field validators
//!
//! Pure checks mapping a field's current value to a `ValidationError`, plus the
//! string-returning wrappers the UI layer calls on every keystroke.

use std::fmt;

use log::trace;

use super::fields::{Field, FieldValues};
use super::results::ValidationResult;
use crate::config::ValidationRules;
use crate::error::ValidationError;
use crate::utils::validation::{
    char_len, has_ascii_digit, has_ascii_uppercase, is_well_formed_email,
};

/// A password sub-rule. Displayed in the aggregated password message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordRequirement {
    MinLength(usize),
    Uppercase,
    Digit,
}

impl fmt::Display for PasswordRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PasswordRequirement::MinLength(min) => write!(f, "at least {} characters", min),
            PasswordRequirement::Uppercase => write!(f, "one uppercase letter"),
            PasswordRequirement::Digit => write!(f, "one number"),
        }
    }
}

fn check_min_length(field: Field, value: &str, min: usize) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::FieldRequired(field));
    }
    if char_len(value) < min {
        return Err(ValidationError::FieldTooShort { field, min });
    }
    Ok(())
}

pub fn check_name(value: &str, rules: &ValidationRules) -> Result<(), ValidationError> {
    check_min_length(Field::Name, value, rules.name_min_len)
}

pub fn check_email(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::FieldRequired(Field::Email));
    }
    if !is_well_formed_email(value) {
        return Err(ValidationError::FieldFormatInvalid(Field::Email));
    }
    Ok(())
}

/// Sub-rules the password does not meet, in fixed order.
pub fn unmet_password_requirements(
    value: &str,
    rules: &ValidationRules,
) -> Vec<PasswordRequirement> {
    let mut unmet = Vec::new();
    if char_len(value) < rules.password_min_len {
        unmet.push(PasswordRequirement::MinLength(rules.password_min_len));
    }
    if !has_ascii_uppercase(value) {
        unmet.push(PasswordRequirement::Uppercase);
    }
    if !has_ascii_digit(value) {
        unmet.push(PasswordRequirement::Digit);
    }
    unmet
}

pub fn check_password(value: &str, rules: &ValidationRules) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::FieldRequired(Field::Password));
    }
    let unmet = unmet_password_requirements(value, rules);
    if unmet.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::PasswordWeak(unmet))
    }
}

/// Compares against the current password only; strength is the password's concern.
pub fn check_confirm_password(value: &str, password: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::FieldRequired(Field::ConfirmPassword));
    }
    if value != password {
        return Err(ValidationError::FieldMismatch(Field::ConfirmPassword));
    }
    Ok(())
}

pub fn check_address(value: &str, rules: &ValidationRules) -> Result<(), ValidationError> {
    check_min_length(Field::Address, value, rules.address_min_len)
}

pub fn check_city(value: &str, rules: &ValidationRules) -> Result<(), ValidationError> {
    check_min_length(Field::City, value, rules.city_min_len)
}

pub fn check_country(value: &str, rules: &ValidationRules) -> Result<(), ValidationError> {
    check_min_length(Field::Country, value, rules.country_min_len)
}

/// Typed check for one field.
///
/// `related` is the current password when checking `ConfirmPassword`; it is
/// ignored for every other field. A missing password compares as empty.
pub fn check_field(
    field: Field,
    value: &str,
    related: Option<&str>,
    rules: &ValidationRules,
) -> Result<(), ValidationError> {
    match field {
        Field::Name => check_name(value, rules),
        Field::Email => check_email(value),
        Field::Password => check_password(value, rules),
        Field::ConfirmPassword => check_confirm_password(value, related.unwrap_or("")),
        Field::Address => check_address(value, rules),
        Field::City => check_city(value, rules),
        Field::Country => check_country(value, rules),
    }
}

/// Error message for one field; empty when the value is valid.
pub fn validate_field(
    field: Field,
    value: &str,
    related: Option<&str>,
    rules: &ValidationRules,
) -> String {
    match check_field(field, value, related, rules) {
        Ok(()) => String::new(),
        Err(e) => e.to_string(),
    }
}

/// Runs every validator over the supplied values, absent fields reading as empty.
pub fn validate_all(fields: &FieldValues, rules: &ValidationRules) -> ValidationResult {
    let password = fields.get(Field::Password);
    let outcomes = Field::ALL.iter().map(|&field| {
        let related = (field == Field::ConfirmPassword).then_some(password);
        (field, check_field(field, fields.get(field), related, rules))
    });

    let result = ValidationResult::from_outcomes(outcomes);
    trace!(
        "validate_all: {} field(s), {} error(s)",
        Field::ALL.len(),
        result.messages().len()
    );
    result
}
