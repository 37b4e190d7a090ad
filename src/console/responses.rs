//! Console response formatting
//!
//! Renders form snapshots, error lists and notices as printable text.

use crate::form::{FormPhase, FormState};
use crate::validation::Field;

pub const HELP_TEXT: &str = "\
Commands:
  SIGNUP                 open a new signup form
  LOGIN                  open a new login form
  SET <field> [value]    edit a field (name, email, password, confirm, address, city, country)
                         password values are taken verbatim after one space
  AVATAR <url>           choose a profile picture (signup only)
  SUBMIT                 submit the open form
  SHOW                   show the open form
  HINT <field>           show a field's requirements
  WHOAMI                 show the signed-in account
  HELP                   show this text
  QUIT                   leave
";

/// Format a single response line
pub fn format_response(message: &str) -> String {
    format!("{}\n", message)
}

/// Bulleted error list, one message per line
pub fn format_errors(heading: &str, messages: &[String]) -> String {
    let mut out = format!("{}\n", heading);
    for message in messages {
        out.push_str(&format!("  - {}\n", message));
    }
    out
}

fn display_value(field: Field, value: &str) -> String {
    match field {
        Field::Password | Field::ConfirmPassword => "*".repeat(value.chars().count()),
        _ => value.to_string(),
    }
}

fn phase_label(phase: FormPhase) -> &'static str {
    match phase {
        FormPhase::Editing => "editing",
        FormPhase::Submitting => "submitting",
        FormPhase::Accepted => "accepted",
        FormPhase::Rejected => "rejected",
    }
}

/// Renders every field of the form with its current error, passwords masked.
pub fn format_form(state: &FormState) -> String {
    let mut out = format!(
        "{} form ({}){}\n",
        state.kind().label(),
        phase_label(state.phase()),
        if state.can_submit() {
            ", ready to submit"
        } else {
            ""
        }
    );

    for &field in state.kind().fields() {
        out.push_str(&format!(
            "  {:<17} {}\n",
            format!("{}:", field.label()),
            display_value(field, state.value(field))
        ));
        let error = state.error_for(field);
        if !error.is_empty() {
            out.push_str(&format!("  {:<17} ! {}\n", "", error));
        }
    }

    if let Some(url) = state.avatar_url() {
        out.push_str(&format!("  {:<17} {}\n", "Avatar:", url));
    }

    out
}
