//! Authentication operations
//!
//! The submission gate for the signup and login forms.

use log::{debug, info};

use super::profile::UserProfile;
use super::results::LoginResult;
use super::store::ProfileStore;
use super::validator::verify_credentials;
use crate::config::{AppConfig, ValidationRules};
use crate::error::Rejection;
use crate::error::handlers::report_rejection;
use crate::validation::validator::{check_email, check_password};
use crate::validation::{FieldValues, validate_all};

/// Validates every signup field and, if all pass, registers the profile.
///
/// A blank `avatar_url` falls back to the configured default. The stored
/// profile replaces whatever the store held before.
pub fn try_signup<S>(
    fields: &FieldValues,
    avatar_url: Option<&str>,
    store: &mut S,
    config: &AppConfig,
) -> Result<UserProfile, Rejection>
where
    S: ProfileStore + ?Sized,
{
    let result = validate_all(fields, &config.rules);
    if !result.is_valid() {
        let rejection = Rejection::new(result.into_errors());
        report_rejection("Signup", &rejection);
        return Err(rejection);
    }

    let avatar_url = avatar_url
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(&config.profile.default_avatar_url)
        .to_string();

    let profile = UserProfile::from_fields(fields, avatar_url);
    store.save(profile.clone());
    info!("Registered profile for {}", profile.email);
    Ok(profile)
}

/// Checks login input locally, then against the store.
///
/// A missing or malformed email, or an empty password, fails with the email
/// and password validator messages. Otherwise any failed comparison yields a
/// single generic mismatch; a password failing the strength rules cannot
/// equal a stored one, so it lands there too.
pub fn try_login<S>(
    email: &str,
    password: &str,
    store: &S,
    rules: &ValidationRules,
) -> Result<LoginResult, Rejection>
where
    S: ProfileStore + ?Sized,
{
    let email_check = check_email(email);
    if email_check.is_err() || password.is_empty() {
        let errors = [email_check, check_password(password, rules)]
            .into_iter()
            .filter_map(Result::err)
            .collect();
        let rejection = Rejection::new(errors);
        report_rejection("Login", &rejection);
        return Err(rejection);
    }

    match verify_credentials(email, password, store) {
        Ok(profile) => {
            info!("Login successful for {}", profile.email);
            Ok(LoginResult {
                email: profile.email.clone(),
                name: profile.name.clone(),
            })
        }
        Err(e) => {
            debug!("Credential comparison failed");
            let rejection = Rejection::from(e);
            report_rejection("Login", &rejection);
            Err(rejection)
        }
    }
}
