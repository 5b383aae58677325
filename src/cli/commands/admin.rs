//! User administration commands

use crate::db::repositories::user::generate_password;
use crate::services::{AuthError, BootstrapOutcome};
use crate::state::SharedState;

pub async fn cmd_create_admin(
    state: &SharedState,
    username: &str,
    password: Option<&str>,
) -> anyhow::Result<()> {
    match state.auth_service.bootstrap_admin(username, password).await? {
        BootstrapOutcome::Created {
            username,
            generated_password,
        } => {
            println!("✓ User '{username}' created.");
            if let Some(password) = generated_password {
                println!("  Password: {password}");
                println!("  This password is shown only once.");
            }
        }
        BootstrapOutcome::AlreadyExists { username } => {
            println!("User '{username}' already exists, nothing changed.");
        }
    }

    Ok(())
}

pub async fn cmd_set_password(
    state: &SharedState,
    username: &str,
    password: Option<&str>,
) -> anyhow::Result<()> {
    let generated = password.is_none().then(|| {
        generate_password(state.config.security.generated_password_length)
    });
    let new_password = password.or(generated.as_deref()).unwrap_or_default();

    match state.auth_service.set_password(username, new_password).await {
        Ok(()) => {
            println!("✓ Password for '{username}' updated.");
            if let Some(password) = generated {
                println!("  New password: {password}");
            }
            Ok(())
        }
        Err(AuthError::UserNotFound(name)) => {
            anyhow::bail!("User '{name}' does not exist. Create it with: urenstaat create-admin --username {name}")
        }
        Err(e) => Err(e.into()),
    }
}
