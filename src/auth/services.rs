use lazy_static::lazy_static;
use regex::Regex;
use sqlx::PgPool;
use tracing::{info, warn};

use crate::auth::jwt::JwtKeys;
use crate::auth::password::{hash_password, verify_password};
use crate::auth::repo::{is_unique_violation, User};
use crate::error::ApiError;

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// Hash the password and insert the user. The only store error translated
/// here is the email unique violation; everything else stays internal.
pub async fn signup(db: &PgPool, email: &str, password: &str) -> Result<User, ApiError> {
    let hash = hash_password(password)?;

    match User::create(db, email, &hash).await {
        Ok(user) => {
            info!(user_id = user.id, "user signed up");
            Ok(user)
        }
        Err(e) if is_unique_violation(&e) => {
            warn!(email, "signup with taken email");
            Err(ApiError::EmailInUse)
        }
        Err(e) => Err(e.into()),
    }
}

/// Look up by email, verify the password, issue a token. Unknown email and
/// wrong password are indistinguishable to the caller.
pub async fn signin(
    db: &PgPool,
    keys: &JwtKeys,
    email: &str,
    password: &str,
) -> Result<String, ApiError> {
    let user = match User::find_by_email(db, email).await? {
        Some(u) => u,
        None => {
            warn!(email, "signin with unknown email");
            return Err(ApiError::InvalidCredentials);
        }
    };

    if !verify_password(password, &user.password_hash)? {
        warn!(user_id = user.id, "signin with wrong password");
        return Err(ApiError::InvalidCredentials);
    }

    let token = keys.sign(user.id, &user.email)?;
    info!(user_id = user.id, "user signed in");
    Ok(token)
}
