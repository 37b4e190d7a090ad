//! Registered user profile
//!
//! The record created by a successful signup and read back by login.

use crate::validation::{Field, FieldValues};

/// An in-memory account record. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub password: String,
    pub address: String,
    pub city: String,
    pub country: String,
    pub avatar_url: String,
}

impl UserProfile {
    /// Builds a profile from already-validated signup values.
    pub(crate) fn from_fields(fields: &FieldValues, avatar_url: String) -> Self {
        Self {
            name: fields.get(Field::Name).to_string(),
            email: fields.get(Field::Email).to_string(),
            password: fields.get(Field::Password).to_string(),
            address: fields.get(Field::Address).to_string(),
            city: fields.get(Field::City).to_string(),
            country: fields.get(Field::Country).to_string(),
            avatar_url,
        }
    }
}
