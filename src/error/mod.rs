//! Error handling
//!
//! Defines error types and reporting for the validator and console.

pub mod handlers;
pub mod types;

pub use types::*;
