//! Form state
//!
//! An immutable snapshot of one signup or login form. New snapshots are
//! produced by `form::reduce`; the UI layer decides when to re-render.

use std::collections::BTreeMap;

use crate::validation::{Field, FieldValues};

/// Which screen the form belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Signup,
    Login,
}

impl FormKind {
    /// Fields shown on this form, in display order.
    pub fn fields(&self) -> &'static [Field] {
        match self {
            FormKind::Signup => &Field::ALL,
            FormKind::Login => &Field::LOGIN,
        }
    }

    pub fn has_field(&self, field: Field) -> bool {
        self.fields().contains(&field)
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormKind::Signup => "Signup",
            FormKind::Login => "Login",
        }
    }
}

/// Submission lifecycle: `Editing -> Submitting -> {Accepted, Rejected}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    Submitting,
    Accepted,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub(crate) kind: FormKind,
    pub(crate) phase: FormPhase,
    pub(crate) values: FieldValues,
    pub(crate) errors: BTreeMap<Field, String>,
    pub(crate) avatar_url: Option<String>,
    pub(crate) rejection: Vec<String>,
}

impl FormState {
    pub fn new(kind: FormKind) -> Self {
        Self {
            kind,
            phase: FormPhase::Editing,
            values: FieldValues::new(),
            errors: BTreeMap::new(),
            avatar_url: None,
            rejection: Vec::new(),
        }
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    /// Current error text for a field; empty when valid or untouched.
    pub fn error_for(&self, field: Field) -> &str {
        self.errors.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn avatar_url(&self) -> Option<&str> {
        self.avatar_url.as_deref()
    }

    /// Messages from the last rejected submission, kept until the next edit.
    pub fn rejection_messages(&self) -> &[String] {
        &self.rejection
    }

    /// True while edits and submissions are accepted.
    pub fn is_editable(&self) -> bool {
        matches!(self.phase, FormPhase::Editing | FormPhase::Rejected)
    }

    /// Submit is enabled once every field on the form holds something.
    pub fn can_submit(&self) -> bool {
        self.is_editable()
            && self
                .kind
                .fields()
                .iter()
                .filter(|field| field.is_required())
                .all(|&field| !self.values.get(field).is_empty())
    }
}
