//! Domain service for authentication and user administration.
//!
//! Handles login verification, the one-time admin bootstrap and password resets.

use thiserror::Error;

/// Minimum length for passwords chosen by an administrator.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Errors specific to authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown user and wrong password are deliberately indistinguishable.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<sea_orm::DbErr> for AuthError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for AuthError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

/// Result of the admin bootstrap. An existing user is reported, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapOutcome {
    Created {
        username: String,
        /// Set when the caller did not supply a password and one was generated.
        generated_password: Option<String>,
    },
    AlreadyExists {
        username: String,
    },
}

/// Domain service trait for authentication.
#[async_trait::async_trait]
pub trait AuthService: Send + Sync {
    /// Verifies credentials and returns the canonical username.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] for an unknown user, a wrong
    /// password, or blank input.
    async fn login(&self, username: &str, password: &str) -> Result<String, AuthError>;

    /// Creates `username` unless it already exists. Generates a random
    /// password when `password` is `None`.
    async fn bootstrap_admin(
        &self,
        username: &str,
        password: Option<&str>,
    ) -> Result<BootstrapOutcome, AuthError>;

    /// Replaces the password of an existing user.
    async fn set_password(&self, username: &str, new_password: &str) -> Result<(), AuthError>;
}

pub(crate) fn validate_new_password(password: &str) -> Result<(), AuthError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AuthError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    Ok(())
}
