//! Credential and profile validation
//!
//! Field definitions, per-field validators and whole-form validation.

pub mod fields;
pub mod results;
pub mod validator;

pub use fields::{Field, FieldValues, UnknownField};
pub use results::ValidationResult;
pub use validator::{PasswordRequirement, check_field, validate_all, validate_field};
