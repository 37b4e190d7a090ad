//! Validation result types
//!
//! Defines the verdict returned by a whole-form validation pass.

use std::collections::BTreeMap;

use super::fields::Field;
use crate::error::ValidationError;

/// Result of validating a set of fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    field_errors: BTreeMap<Field, String>,
    messages: Vec<String>,
    errors: Vec<ValidationError>,
}

impl ValidationResult {
    /// Builds a result from per-field outcomes. Messages follow field order.
    pub fn from_outcomes<I>(outcomes: I) -> Self
    where
        I: IntoIterator<Item = (Field, Result<(), ValidationError>)>,
    {
        let mut checked: Vec<(Field, Result<(), ValidationError>)> = outcomes.into_iter().collect();
        checked.sort_by_key(|(field, _)| *field);

        let mut result = Self::default();
        for (field, outcome) in checked {
            match outcome {
                Ok(()) => {
                    result.field_errors.insert(field, String::new());
                }
                Err(e) => {
                    let message = e.to_string();
                    result.field_errors.insert(field, message.clone());
                    result.messages.push(message);
                    result.errors.push(e);
                }
            }
        }
        result
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Error text for a field; empty when the field was valid or not checked.
    pub fn error_for(&self, field: Field) -> &str {
        self.field_errors.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Per-field error text for every checked field.
    pub fn field_errors(&self) -> &BTreeMap<Field, String> {
        &self.field_errors
    }

    /// Non-empty messages in field order.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }
}
