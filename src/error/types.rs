//! Error types
//!
//! Defines the validation error taxonomy, the rejection returned by the
//! submission gate, and the top-level application error.

use std::fmt;
use std::io;

use crate::validation::{Field, PasswordRequirement};

/// Generic message shown for any failed credential comparison.
///
/// Deliberately identical whether the email or the password was wrong.
pub const CREDENTIAL_MISMATCH_MESSAGE: &str = "Invalid email or password. Please try again.";

/// Field-level validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    FieldRequired(Field),
    FieldTooShort { field: Field, min: usize },
    FieldFormatInvalid(Field),
    PasswordWeak(Vec<PasswordRequirement>),
    FieldMismatch(Field),
    CredentialMismatch,
}

impl ValidationError {
    /// The field this error is attached to, if any.
    ///
    /// `CredentialMismatch` belongs to the whole form.
    pub fn field(&self) -> Option<Field> {
        match self {
            ValidationError::FieldRequired(field)
            | ValidationError::FieldTooShort { field, .. }
            | ValidationError::FieldFormatInvalid(field)
            | ValidationError::FieldMismatch(field) => Some(*field),
            ValidationError::PasswordWeak(_) => Some(Field::Password),
            ValidationError::CredentialMismatch => None,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::FieldRequired(Field::ConfirmPassword) => {
                write!(f, "Please confirm your password")
            }
            ValidationError::FieldRequired(field) => write!(f, "{} is required", field.label()),
            ValidationError::FieldTooShort { field, min } => {
                write!(f, "{} must be at least {} characters", field.subject(), min)
            }
            ValidationError::FieldFormatInvalid(Field::Email) => {
                write!(f, "Please enter a valid email address (example@domain.com)")
            }
            ValidationError::FieldFormatInvalid(field) => {
                write!(f, "{} has an invalid format", field.label())
            }
            ValidationError::PasswordWeak(unmet) => {
                let parts: Vec<String> = unmet.iter().map(|r| r.to_string()).collect();
                write!(f, "Password must contain {}", parts.join(", "))
            }
            ValidationError::FieldMismatch(Field::ConfirmPassword) => {
                write!(f, "Passwords do not match")
            }
            ValidationError::FieldMismatch(field) => write!(f, "{} does not match", field.label()),
            ValidationError::CredentialMismatch => write!(f, "{}", CREDENTIAL_MISMATCH_MESSAGE),
        }
    }
}

impl std::error::Error for ValidationError {}

/// A rejected signup or login attempt with its ordered error list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    errors: Vec<ValidationError>,
}

impl Rejection {
    pub fn new(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }

    /// Rejection carrying only the generic credential mismatch.
    pub fn credential_mismatch() -> Self {
        Self::new(vec![ValidationError::CredentialMismatch])
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Human-readable messages in display order.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.messages().join("; "))
    }
}

impl std::error::Error for Rejection {}

impl From<ValidationError> for Rejection {
    fn from(error: ValidationError) -> Self {
        Rejection::new(vec![error])
    }
}

/// Errors that end the console session
#[derive(Debug)]
pub enum AppError {
    Config(config::ConfigError),
    Io(io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(e) => write!(f, "Configuration error: {}", e),
            AppError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for AppError {}

impl From<config::ConfigError> for AppError {
    fn from(error: config::ConfigError) -> Self {
        AppError::Config(error)
    }
}

impl From<io::Error> for AppError {
    fn from(error: io::Error) -> Self {
        AppError::Io(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_messages() {
        assert_eq!(
            ValidationError::FieldRequired(Field::Name).to_string(),
            "Name is required"
        );
        assert_eq!(
            ValidationError::FieldRequired(Field::ConfirmPassword).to_string(),
            "Please confirm your password"
        );
    }

    #[test]
    fn test_too_short_uses_subject() {
        let err = ValidationError::FieldTooShort {
            field: Field::City,
            min: 2,
        };
        assert_eq!(err.to_string(), "City name must be at least 2 characters");
    }

    #[test]
    fn test_password_weak_lists_unmet_rules() {
        let err = ValidationError::PasswordWeak(vec![
            PasswordRequirement::MinLength(6),
            PasswordRequirement::Uppercase,
        ]);
        assert_eq!(
            err.to_string(),
            "Password must contain at least 6 characters, one uppercase letter"
        );
    }

    #[test]
    fn test_rejection_messages_keep_order() {
        let rejection = Rejection::new(vec![
            ValidationError::FieldRequired(Field::Email),
            ValidationError::FieldRequired(Field::Password),
        ]);
        assert_eq!(
            rejection.messages(),
            vec!["Email is required", "Password is required"]
        );
        assert_eq!(rejection.len(), 2);
    }

    #[test]
    fn test_credential_mismatch_has_no_field() {
        assert_eq!(ValidationError::CredentialMismatch.field(), None);
        assert_eq!(
            Rejection::credential_mismatch().messages(),
            vec![CREDENTIAL_MISMATCH_MESSAGE]
        );
    }
}
