use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Credential row from `auth.users`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: String,            // integer or uuid in storage, read as text
    pub email: String,         // unique, matched exactly
    #[serde(skip_serializing)]
    pub password_hash: String, // Argon2 PHC string, never exposed
}
