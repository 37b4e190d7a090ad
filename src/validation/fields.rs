//! Form fields
//!
//! The fixed set of signup/login fields and the value map the UI layer hands in.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::config::ValidationRules;

/// A form field. Declaration order is the display order of error lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Password,
    ConfirmPassword,
    Address,
    City,
    Country,
}

impl Field {
    /// Every field, in display order.
    pub const ALL: [Field; 7] = [
        Field::Name,
        Field::Email,
        Field::Password,
        Field::ConfirmPassword,
        Field::Address,
        Field::City,
        Field::Country,
    ];

    /// Fields checked by the login form.
    pub const LOGIN: [Field; 2] = [Field::Email, Field::Password];

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Password => "Password",
            Field::ConfirmPassword => "Confirm password",
            Field::Address => "Address",
            Field::City => "City",
            Field::Country => "Country",
        }
    }

    /// Wording used when a length rule fails ("City name must be ...").
    pub(crate) fn subject(&self) -> &'static str {
        match self {
            Field::City => "City name",
            Field::Country => "Country name",
            other => other.label(),
        }
    }

    /// Every field is required on the forms that show it.
    pub fn is_required(&self) -> bool {
        true
    }

    /// Help text shown while the field has focus.
    pub fn constraint_hint(&self, rules: &ValidationRules) -> String {
        match self {
            Field::Name => format!("Minimum {} characters", rules.name_min_len),
            Field::Email => "Format: example@domain.com".to_string(),
            Field::Password => format!(
                "Minimum {} characters, at least 1 uppercase letter and 1 number",
                rules.password_min_len
            ),
            Field::ConfirmPassword => "Must match your password".to_string(),
            Field::Address => format!("Minimum {} characters", rules.address_min_len),
            Field::City => format!("Minimum {} characters", rules.city_min_len),
            Field::Country => format!("Minimum {} characters", rules.country_min_len),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a field name cannot be recognised
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownField(pub String);

impl fmt::Display for UnknownField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown field: {}", self.0)
    }
}

impl std::error::Error for UnknownField {}

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(Field::Name),
            "email" => Ok(Field::Email),
            "password" => Ok(Field::Password),
            "confirm" | "confirm_password" | "confirmpassword" => Ok(Field::ConfirmPassword),
            "address" => Ok(Field::Address),
            "city" => Ok(Field::City),
            "country" => Ok(Field::Country),
            _ => Err(UnknownField(s.to_string())),
        }
    }
}

/// Raw field values keyed by field. Missing fields read as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValues {
    values: BTreeMap<Field, String>,
}

impl FieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    pub fn get(&self, field: Field) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.values.iter().map(|(f, v)| (*f, v.as_str()))
    }
}

impl FromIterator<(Field, String)> for FieldValues {
    fn from_iter<I: IntoIterator<Item = (Field, String)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
