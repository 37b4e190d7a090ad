//! Form state management
//!
//! Immutable form snapshots, the reducer that advances them and submission.

pub mod reducer;
pub mod state;
pub mod submission;

pub use reducer::{FormEvent, reduce};
pub use state::{FormKind, FormPhase, FormState};
pub use submission::{SubmitOutcome, submit};
