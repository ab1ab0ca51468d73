use tracing::info;

use crate::auth::{password::hash_password, repo::CredentialStore};

pub const ADMIN_EMAIL: &str = "admin@email.com";
pub const ADMIN_PASSWORD: &str = "secret_password_123";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Created,
    AlreadyExists,
}

/// Ensures the bootstrap admin credential exists. Safe to run repeatedly.
pub async fn ensure_admin_exists(store: &dyn CredentialStore) -> anyhow::Result<SeedOutcome> {
    ensure_user_exists(store, ADMIN_EMAIL, ADMIN_PASSWORD).await
}

pub async fn ensure_user_exists(
    store: &dyn CredentialStore,
    email: &str,
    password: &str,
) -> anyhow::Result<SeedOutcome> {
    if store.find_by_email(email).await?.is_some() {
        info!(email = %email, "user already exists");
        return Ok(SeedOutcome::AlreadyExists);
    }

    let hash = hash_password(password)?;
    // A concurrent seeder may win between the check and the insert.
    if store.insert_if_absent(email, &hash).await? {
        info!(email = %email, "user created");
        Ok(SeedOutcome::Created)
    } else {
        info!(email = %email, "user already exists");
        Ok(SeedOutcome::AlreadyExists)
    }
}
