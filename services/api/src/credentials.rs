//! Pluggable credential verification
//!
//! The login route checks credentials through the `CredentialStore` trait,
//! so the single-account setup can be swapped for a real user store without
//! touching the handlers.

use constant_time_eq::constant_time_eq;
use std::env;

/// Credential verification capability
pub trait CredentialStore: Send + Sync {
    /// Check a username/password pair against the store
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// A single configured account
///
/// Both fields are compared unconditionally and in constant time, so
/// response timing does not reveal which of the two was wrong.
#[derive(Debug, Clone)]
pub struct StaticCredentials {
    username: String,
    password: String,
}

impl StaticCredentials {
    /// Create a static credential pair
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Create a StaticCredentials from environment variables
    ///
    /// # Environment Variables
    /// - `API_USERNAME`: Account username (default: "admin")
    /// - `API_PASSWORD`: Account password (default: "admin")
    pub fn from_env() -> Self {
        let username = env::var("API_USERNAME").unwrap_or_else(|_| "admin".to_string());
        let password = env::var("API_PASSWORD").unwrap_or_else(|_| "admin".to_string());

        Self { username, password }
    }
}

impl CredentialStore for StaticCredentials {
    fn verify(&self, username: &str, password: &str) -> bool {
        let username_ok = constant_time_eq(username.as_bytes(), self.username.as_bytes());
        let password_ok = constant_time_eq(password.as_bytes(), self.password.as_bytes());
        username_ok & password_ok
    }
}
