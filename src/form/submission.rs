//! Form submission
//!
//! Drives a form through `Submitting` and into `Accepted` or `Rejected` by
//! running the signup or login gate against the store.

use log::debug;

use super::reducer::{FormEvent, reduce};
use super::state::{FormKind, FormPhase, FormState};
use crate::auth::{LoginResult, ProfileStore, UserProfile, try_login, try_signup};
use crate::config::AppConfig;
use crate::error::Rejection;
use crate::validation::Field;

/// What a submit press produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    SignedUp(UserProfile),
    LoggedIn(LoginResult),
    Rejected(Rejection),
    /// The form was not in a phase that accepts submissions.
    NotSubmittable,
}

/// Submits `state`, returning the settled form and the outcome.
pub fn submit<S>(state: &FormState, store: &mut S, config: &AppConfig) -> (FormState, SubmitOutcome)
where
    S: ProfileStore + ?Sized,
{
    let submitting = reduce(state, FormEvent::Submit, &config.rules);
    if submitting.phase() != FormPhase::Submitting {
        debug!(
            "{} form not submittable in {:?}",
            state.kind().label(),
            state.phase()
        );
        return (submitting, SubmitOutcome::NotSubmittable);
    }

    let values = submitting.values();
    let outcome = match submitting.kind() {
        FormKind::Signup => try_signup(values, submitting.avatar_url(), store, config)
            .map(SubmitOutcome::SignedUp),
        FormKind::Login => try_login(
            values.get(Field::Email),
            values.get(Field::Password),
            &*store,
            &config.rules,
        )
        .map(SubmitOutcome::LoggedIn),
    };

    match outcome {
        Ok(accepted) => (
            reduce(&submitting, FormEvent::Accept, &config.rules),
            accepted,
        ),
        Err(rejection) => (
            reduce(&submitting, FormEvent::Reject(rejection.clone()), &config.rules),
            SubmitOutcome::Rejected(rejection),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::SingleSlotStore;

    fn filled_signup(config: &AppConfig) -> FormState {
        let edits = [
            (Field::Name, "Ada"),
            (Field::Email, "a@b.com"),
            (Field::Password, "Abc123"),
            (Field::ConfirmPassword, "Abc123"),
            (Field::Address, "1 Main St"),
            (Field::City, "NY"),
            (Field::Country, "US"),
        ];
        edits
            .iter()
            .fold(FormState::new(FormKind::Signup), |state, (field, value)| {
                reduce(&state, FormEvent::Edit(*field, value.to_string()), &config.rules)
            })
    }

    #[test]
    fn test_signup_then_login() {
        let config = AppConfig::default();
        let mut store = SingleSlotStore::new();

        let signup = filled_signup(&config);
        assert!(signup.can_submit());
        let (signup, outcome) = submit(&signup, &mut store, &config);
        assert_eq!(signup.phase(), FormPhase::Accepted);
        assert!(matches!(outcome, SubmitOutcome::SignedUp(ref p) if p.email == "a@b.com"));

        let login = [(Field::Email, "a@b.com"), (Field::Password, "Abc123")]
            .iter()
            .fold(FormState::new(FormKind::Login), |state, (field, value)| {
                reduce(&state, FormEvent::Edit(*field, value.to_string()), &config.rules)
            });
        let (login, outcome) = submit(&login, &mut store, &config);
        assert_eq!(login.phase(), FormPhase::Accepted);
        assert!(matches!(outcome, SubmitOutcome::LoggedIn(_)));
    }

    #[test]
    fn test_rejected_signup_attaches_errors() {
        let config = AppConfig::default();
        let mut store = SingleSlotStore::new();
        let form = reduce(
            &filled_signup(&config),
            FormEvent::Edit(Field::Name, "Jo".into()),
            &config.rules,
        );

        let (form, outcome) = submit(&form, &mut store, &config);
        assert_eq!(form.phase(), FormPhase::Rejected);
        assert_eq!(
            form.rejection_messages(),
            &["Name must be at least 3 characters".to_string()]
        );
        assert_eq!(form.error_for(Field::Name), "Name must be at least 3 characters");
        match outcome {
            SubmitOutcome::Rejected(rejection) => assert_eq!(rejection.len(), 1),
            other => panic!("expected rejection, got {:?}", other),
        }
        assert!(store.current().is_none());
    }

    #[test]
    fn test_resubmit_after_rejection() {
        let config = AppConfig::default();
        let mut store = SingleSlotStore::new();
        let form = reduce(
            &filled_signup(&config),
            FormEvent::Edit(Field::City, "N".into()),
            &config.rules,
        );
        let (form, _) = submit(&form, &mut store, &config);
        assert_eq!(form.phase(), FormPhase::Rejected);

        let form = reduce(&form, FormEvent::Edit(Field::City, "NY".into()), &config.rules);
        let (form, outcome) = submit(&form, &mut store, &config);
        assert_eq!(form.phase(), FormPhase::Accepted);
        assert!(matches!(outcome, SubmitOutcome::SignedUp(_)));
    }

    #[test]
    fn test_accepted_form_not_submittable() {
        let config = AppConfig::default();
        let mut store = SingleSlotStore::new();
        let (form, _) = submit(&filled_signup(&config), &mut store, &config);
        let (_, outcome) = submit(&form, &mut store, &config);
        assert_eq!(outcome, SubmitOutcome::NotSubmittable);
    }
}
