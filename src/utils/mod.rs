//! Utility functions
//!
//! Logging setup and string predicates shared across modules.

pub mod logging;
pub mod validation;
