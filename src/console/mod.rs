//! Console driver
//!
//! A line-oriented stand-in for the storefront's signup and login screens.

pub mod commands;
pub mod handlers;
pub mod parser;
pub mod responses;
pub mod session;

pub use commands::{Command, CommandResult, CommandStatus};
pub use handlers::handle_command;
pub use parser::parse_command;
pub use session::Session;
