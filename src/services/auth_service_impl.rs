//! `SeaORM` implementation of the `AuthService` trait.

use crate::config::SecurityConfig;
use crate::db::Store;
use crate::db::repositories::user::generate_password;
use crate::services::auth_service::{
    AuthError, AuthService, BootstrapOutcome, validate_new_password,
};
use async_trait::async_trait;
use tracing::{info, warn};

pub struct SeaOrmAuthService {
    store: Store,
    security: SecurityConfig,
}

impl SeaOrmAuthService {
    #[must_use]
    pub const fn new(store: Store, security: SecurityConfig) -> Self {
        Self { store, security }
    }
}

#[async_trait]
impl AuthService for SeaOrmAuthService {
    async fn login(&self, username: &str, password: &str) -> Result<String, AuthError> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            metrics::counter!("logins_total", "outcome" => "rejected").increment(1);
            return Err(AuthError::InvalidCredentials);
        }

        let is_valid = self.store.verify_user_password(username, password).await?;

        if !is_valid {
            warn!(username, "Failed login attempt");
            metrics::counter!("logins_total", "outcome" => "rejected").increment(1);
            return Err(AuthError::InvalidCredentials);
        }

        info!(username, "User logged in");
        metrics::counter!("logins_total", "outcome" => "accepted").increment(1);
        Ok(username.to_string())
    }

    async fn bootstrap_admin(
        &self,
        username: &str,
        password: Option<&str>,
    ) -> Result<BootstrapOutcome, AuthError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(AuthError::Validation("Username is required".to_string()));
        }

        if self.store.get_user_by_username(username).await?.is_some() {
            info!(username, "Bootstrap skipped, user already exists");
            return Ok(BootstrapOutcome::AlreadyExists {
                username: username.to_string(),
            });
        }

        let (password, generated_password) = match password {
            Some(p) => {
                validate_new_password(p)?;
                (p.to_string(), None)
            }
            None => {
                let p = generate_password(self.security.generated_password_length);
                (p.clone(), Some(p))
            }
        };

        let user = self
            .store
            .create_user(username, &password, &self.security)
            .await?;

        info!(username = %user.username, "Created user");

        Ok(BootstrapOutcome::Created {
            username: user.username,
            generated_password,
        })
    }

    async fn set_password(&self, username: &str, new_password: &str) -> Result<(), AuthError> {
        validate_new_password(new_password)?;

        let updated = self
            .store
            .update_user_password(username, new_password, &self.security)
            .await?;

        if !updated {
            return Err(AuthError::UserNotFound(username.to_string()));
        }

        info!(username, "Password changed");
        Ok(())
    }
}
