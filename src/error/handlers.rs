//! Error handlers
//!
//! Reporting helpers for rejected submissions and fatal application errors.

use crate::error::types::{AppError, Rejection};
use log::{error, warn};

/// Log a fatal application error
pub fn handle_error(err: &AppError) {
    error!("Shopfront error: {}", err);
}

/// Log a rejected submission without echoing field values
pub fn report_rejection(form: &str, rejection: &Rejection) {
    warn!(
        "{} submission rejected with {} error(s): {}",
        form,
        rejection.len(),
        rejection
    );
}

/// Convert a fatal error to a process exit status
pub fn exit_code(err: &AppError) -> i32 {
    match err {
        AppError::Config(_) => 78,
        AppError::Io(_) => 74,
    }
}
