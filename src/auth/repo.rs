use anyhow::Context;
use async_trait::async_trait;
use sqlx::PgPool;

use crate::auth::repo_types::User;

/// Storage seam for user credentials.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Find a user by exact email.
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>>;

    /// Insert a credential unless the email is already taken.
    /// Returns `true` when a row was written.
    async fn insert_if_absent(&self, email: &str, password_hash: &str) -> anyhow::Result<bool>;
}

#[derive(Clone)]
pub struct PgCredentialStore {
    db: PgPool,
}

impl PgCredentialStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CredentialStore for PgCredentialStore {
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id::text AS id, email, password_hash
            FROM auth.users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.db)
        .await
        .context("find user by email")?;
        Ok(user)
    }

    async fn insert_if_absent(&self, email: &str, password_hash: &str) -> anyhow::Result<bool> {
        let mut tx = self.db.begin().await.context("begin tx")?;
        let result = sqlx::query(
            r#"
            INSERT INTO auth.users (email, password_hash)
            VALUES ($1, $2)
            ON CONFLICT (email) DO NOTHING
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .execute(&mut *tx)
        .await
        .context("insert user")?;
        tx.commit().await.context("commit tx")?;
        Ok(result.rows_affected() == 1)
    }
}

#[cfg(test)]
pub use memory::MemoryCredentialStore;
