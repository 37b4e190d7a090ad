//! Authentication result types
//!
//! Defines result structures returned by signup and login.

/// Notice shown after a successful signup
pub const SIGNUP_SUCCESS_NOTICE: &str =
    "Account Created Successfully! You can now log in with your credentials.";

/// Notice shown after a successful login
pub const LOGIN_SUCCESS_NOTICE: &str = "Login Successful! You have successfully logged in.";

/// Result of a successful login
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginResult {
    pub email: String,
    pub name: String,
}
