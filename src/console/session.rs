//! Console session
//!
//! Tracks the open form and the signed-in account for one console run.

use crate::form::{FormKind, FormState};

pub struct Session {
    form: FormState,
    signed_in: Option<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            form: FormState::new(FormKind::Signup),
            signed_in: None,
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn set_form(&mut self, form: FormState) {
        self.form = form;
    }

    /// Replaces the open form with a blank one of `kind`.
    pub fn open(&mut self, kind: FormKind) {
        self.form = FormState::new(kind);
    }

    pub fn signed_in(&self) -> Option<&str> {
        self.signed_in.as_deref()
    }

    pub fn set_signed_in(&mut self, email: Option<String>) {
        self.signed_in = email;
    }
}
