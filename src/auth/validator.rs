//! Credential verification
//!
//! Compares syntactically valid login credentials with the profile store.

use super::profile::UserProfile;
use super::store::ProfileStore;
use crate::error::ValidationError;

/// Returns the matching profile, or a mismatch that does not say which half was wrong.
pub fn verify_credentials<'a, S>(
    email: &str,
    password: &str,
    store: &'a S,
) -> Result<&'a UserProfile, ValidationError>
where
    S: ProfileStore + ?Sized,
{
    match store.find_by_email(email) {
        Some(profile) if profile.password == password => Ok(profile),
        _ => Err(ValidationError::CredentialMismatch),
    }
}
