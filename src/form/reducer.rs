//! Form reducer
//!
//! Pure transitions from one `FormState` to the next.

use log::debug;

use super::state::{FormKind, FormPhase, FormState};
use crate::config::ValidationRules;
use crate::error::Rejection;
use crate::validation::{Field, validate_field};

/// Something the UI layer reports about a form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// A field's text changed (one keystroke or a paste).
    Edit(Field, String),
    /// A profile picture was picked on the signup form.
    SetAvatar(String),
    /// The submit button was pressed.
    Submit,
    /// The submission gate accepted the form.
    Accept,
    /// The submission gate rejected the form.
    Reject(Rejection),
}

/// Applies `event` to `state`. Events that do not fit the current phase or
/// form leave the state unchanged.
pub fn reduce(state: &FormState, event: FormEvent, rules: &ValidationRules) -> FormState {
    let mut next = state.clone();

    match event {
        FormEvent::Edit(field, value) => {
            if !state.is_editable() || !state.kind.has_field(field) {
                debug!(
                    "Ignoring edit of {} on {} form in {:?}",
                    field,
                    state.kind.label(),
                    state.phase
                );
                return next;
            }

            next.phase = FormPhase::Editing;
            next.rejection.clear();
            next.values.set(field, value);
            revalidate(&mut next, field, rules);

            // The confirmation depends on the password, not the other way round.
            if field == Field::Password && !next.values.get(Field::ConfirmPassword).is_empty() {
                revalidate(&mut next, Field::ConfirmPassword, rules);
            }
        }
        FormEvent::SetAvatar(url) => {
            if state.is_editable() && state.kind == FormKind::Signup {
                next.avatar_url = Some(url);
            }
        }
        FormEvent::Submit => {
            if state.is_editable() {
                next.phase = FormPhase::Submitting;
            }
        }
        FormEvent::Accept => {
            if state.phase == FormPhase::Submitting {
                next.phase = FormPhase::Accepted;
                next.errors.clear();
                next.rejection.clear();
            }
        }
        FormEvent::Reject(rejection) => {
            if state.phase == FormPhase::Submitting {
                next.phase = FormPhase::Rejected;
                for &field in state.kind.fields() {
                    let message = rejection
                        .errors()
                        .iter()
                        .find(|e| e.field() == Some(field))
                        .map(|e| e.to_string())
                        .unwrap_or_default();
                    next.errors.insert(field, message);
                }
                next.rejection = rejection.messages();
            }
        }
    }

    next
}

fn revalidate(state: &mut FormState, field: Field, rules: &ValidationRules) {
    let related = (field == Field::ConfirmPassword).then(|| state.values.get(Field::Password));
    let message = validate_field(field, state.values.get(field), related, rules);
    state.errors.insert(field, message);
}
