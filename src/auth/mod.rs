//! Authentication system
//!
//! Profile storage, credential verification and the signup/login gate.

pub mod operations;
pub mod profile;
pub mod results;
pub mod store;
pub mod validator;

pub use operations::{try_login, try_signup};
pub use profile::UserProfile;
pub use results::{LOGIN_SUCCESS_NOTICE, LoginResult, SIGNUP_SUCCESS_NOTICE};
pub use store::{ProfileStore, SingleSlotStore};
pub use validator::verify_credentials;
