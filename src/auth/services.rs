use tracing::{info, instrument, warn};

use crate::{
    auth::{jwt::JwtKeys, password::verify_password, repo::CredentialStore},
    error::AppError,
};

const INVALID_CREDENTIALS: &str = "invalid credentials";
const UNKNOWN_EMAIL: &str = "email not found";
const WRONG_PASSWORD: &str = "incorrect password";

/// Verifies an email/password pair and issues an access token for the user.
///
/// Empty or absent fields fail before the store is touched. When
/// `distinct_errors` is set, unknown email and wrong password get separate
/// messages; otherwise both report "invalid credentials".
#[instrument(skip_all)]
pub async fn authenticate(
    store: &dyn CredentialStore,
    keys: &JwtKeys,
    email: Option<&str>,
    password: Option<&str>,
    distinct_errors: bool,
) -> Result<String, AppError> {
    let (email, password) = match (email, password) {
        (Some(e), Some(p)) if !e.is_empty() && !p.is_empty() => (e, p),
        _ => {
            warn!("login without credentials");
            return Err(AppError::MissingCredentials);
        }
    };

    let Some(user) = store.find_by_email(email).await? else {
        warn!(email = %email, "login unknown email");
        return Err(AppError::InvalidCredentials(if distinct_errors {
            UNKNOWN_EMAIL
        } else {
            INVALID_CREDENTIALS
        }));
    };

    if !verify_password(password, &user.password_hash)? {
        warn!(email = %email, user_id = %user.id, "login invalid password");
        return Err(AppError::InvalidCredentials(if distinct_errors {
            WRONG_PASSWORD
        } else {
            INVALID_CREDENTIALS
        }));
    }

    let token = keys.sign(&user.id)?;
    info!(user_id = %user.id, "user logged in");
    Ok(token)
}
