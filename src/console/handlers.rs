//! Command handlers for the shopfront console.
//!
//! Each handler turns one parsed command into form events or submissions and
//! reports the outcome as a `CommandResult`.

use log::{debug, info};

use super::commands::{Command, CommandResult, CommandStatus};
use super::responses::{HELP_TEXT, format_errors, format_form, format_response};
use super::session::Session;
use crate::auth::{LOGIN_SUCCESS_NOTICE, ProfileStore, SIGNUP_SUCCESS_NOTICE};
use crate::config::AppConfig;
use crate::form::{FormEvent, FormKind, SubmitOutcome, reduce, submit};
use crate::validation::Field;

/// Dispatches a parsed command to its handler.
pub fn handle_command<S>(
    session: &mut Session,
    command: &Command,
    store: &mut S,
    config: &AppConfig,
) -> CommandResult
where
    S: ProfileStore + ?Sized,
{
    match command {
        Command::Signup => handle_cmd_open(session, FormKind::Signup),
        Command::Login => handle_cmd_open(session, FormKind::Login),
        Command::Set(field, value) => handle_cmd_set(session, *field, value, config),
        Command::Avatar(url) => handle_cmd_avatar(session, url, config),
        Command::Submit => handle_cmd_submit(session, store, config),
        Command::Show => CommandResult::success(format_form(session.form())),
        Command::Hint(field) => {
            CommandResult::success(format_response(&field.constraint_hint(&config.rules)))
        }
        Command::Whoami => handle_cmd_whoami(session),
        Command::Help => CommandResult::success(HELP_TEXT),
        Command::Quit => CommandResult {
            status: CommandStatus::Exit,
            message: Some(format_response("Goodbye")),
        },
        Command::Invalid(reason) => {
            CommandResult::failure(reason.clone(), format_response(reason))
        }
        Command::Unknown(raw) => CommandResult::failure(
            format!("Unknown command: {}", raw),
            format_response("Unknown command, type HELP for a list"),
        ),
    }
}

fn handle_cmd_open(session: &mut Session, kind: FormKind) -> CommandResult {
    session.open(kind);
    debug!("Opened {} form", kind.label());
    CommandResult::success(format_form(session.form()))
}

/// Applies one edit and reports the field's error, plus the confirmation's
/// when a password edit re-checked it.
fn handle_cmd_set(
    session: &mut Session,
    field: Field,
    value: &str,
    config: &AppConfig,
) -> CommandResult {
    let form = session.form();
    if !form.kind().has_field(field) {
        let reason = format!("{} is not on the {} form", field.label(), form.kind().label());
        return CommandResult::failure(reason.clone(), format_response(&reason));
    }
    if !form.is_editable() {
        let reason = "Form already submitted, open a new one".to_string();
        return CommandResult::failure(reason.clone(), format_response(&reason));
    }

    let next = reduce(form, FormEvent::Edit(field, value.to_string()), &config.rules);

    let mut checked = vec![field];
    if field == Field::Password && !next.value(Field::ConfirmPassword).is_empty() {
        checked.push(Field::ConfirmPassword);
    }
    let errors: Vec<String> = checked
        .iter()
        .map(|&f| next.error_for(f))
        .filter(|e| !e.is_empty())
        .map(str::to_string)
        .collect();

    session.set_form(next);

    if errors.is_empty() {
        CommandResult::success(format_response("ok"))
    } else {
        CommandResult::failure(errors.join("; "), format_errors("Invalid input:", &errors))
    }
}

fn handle_cmd_avatar(session: &mut Session, url: &str, config: &AppConfig) -> CommandResult {
    if session.form().kind() != FormKind::Signup || !session.form().is_editable() {
        let reason = "Avatars can only be chosen on an open signup form".to_string();
        return CommandResult::failure(reason.clone(), format_response(&reason));
    }
    let next = reduce(
        session.form(),
        FormEvent::SetAvatar(url.to_string()),
        &config.rules,
    );
    session.set_form(next);
    CommandResult::success(format_response("ok"))
}

fn handle_cmd_submit<S>(session: &mut Session, store: &mut S, config: &AppConfig) -> CommandResult
where
    S: ProfileStore + ?Sized,
{
    let kind = session.form().kind();
    let (next, outcome) = submit(session.form(), store, config);
    session.set_form(next);

    match outcome {
        SubmitOutcome::SignedUp(profile) => {
            info!("Signup accepted for {}", profile.email);
            // A successful signup moves on to the login screen.
            session.open(FormKind::Login);
            CommandResult::success(format!(
                "{}{}",
                format_response(SIGNUP_SUCCESS_NOTICE),
                format_form(session.form())
            ))
        }
        SubmitOutcome::LoggedIn(result) => {
            session.set_signed_in(Some(result.email.clone()));
            CommandResult::success(format!(
                "{}{}",
                format_response(LOGIN_SUCCESS_NOTICE),
                format_response(&format!("Welcome, {}", result.name))
            ))
        }
        SubmitOutcome::Rejected(rejection) => {
            let messages = rejection.messages();
            CommandResult::failure(
                rejection.to_string(),
                format_errors(&format!("{} rejected:", kind.label()), &messages),
            )
        }
        SubmitOutcome::NotSubmittable => {
            let reason = "Form already submitted, open a new one".to_string();
            CommandResult::failure(reason.clone(), format_response(&reason))
        }
    }
}

fn handle_cmd_whoami(session: &Session) -> CommandResult {
    match session.signed_in() {
        Some(email) => CommandResult::success(format_response(&format!("Signed in as {}", email))),
        None => CommandResult::failure("Not signed in", format_response("Not signed in")),
    }
}
