pub mod auth;
pub mod config;
pub mod console;
pub mod error;
pub mod form;
pub mod utils;
pub mod validation;

pub use auth::{LoginResult, ProfileStore, SingleSlotStore, UserProfile, try_login, try_signup};
pub use config::{AppConfig, ValidationRules};
pub use error::{AppError, Rejection, ValidationError};
pub use form::{FormEvent, FormKind, FormPhase, FormState, reduce, submit};
pub use validation::{Field, FieldValues, ValidationResult, validate_all, validate_field};
