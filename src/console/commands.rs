//! Console commands
//!
//! The actions a user can take at the console, standing in for screen taps.

use crate::validation::Field;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Signup,
    Login,
    Set(Field, String),
    Avatar(String),
    Submit,
    Show,
    Hint(Field),
    Whoami,
    Help,
    Quit,
    /// A known verb with bad arguments.
    Invalid(String),
    Unknown(String),
}

/// Status of a handled command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandStatus {
    Success,
    Failure(String),
    Exit,
}

/// Outcome of a handled command: its status plus the text to print
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub status: CommandStatus,
    pub message: Option<String>,
}

impl CommandResult {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: CommandStatus::Success,
            message: Some(message.into()),
        }
    }

    pub fn failure(reason: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status: CommandStatus::Failure(reason.into()),
            message: Some(message.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == CommandStatus::Success
    }
}
