//! # Authentication Module
//!
//! Password hashing and session handling for the booking API.
//!
//! Passwords are hashed with Argon2 and verified through the library's
//! constant-time entry point; stored hashes are never compared by hand.
//! Login mints an opaque random token that is persisted in the sessions
//! table and presented by clients as a bearer token.

use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};
use axum::http::{header, HeaderMap};
use chrono::Utc;
use eyre::Result;
use nobat_core::errors::{NobatError, NobatResult};
use rand::RngCore;
use uuid::Uuid;

use crate::ApiState;

/// The session user attached to an authenticated request.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: Uuid,
    pub username: String,
    pub is_admin: bool,
}

/// Hashes a password using the Argon2 algorithm.
///
/// A fresh random salt is generated per password; the result is a PHC
/// string carrying algorithm, parameters, salt, and hash.
pub fn hash_password(password: &str) -> Result<String> {
    // Generate a fresh, random salt
    let salt = SaltString::generate(&mut OsRng);

    // Create default Argon2 instance
    let argon2 = Argon2::default();

    // Hash the password with salt
    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| eyre::eyre!("Error hashing password: {}", e))?
        .to_string();

    Ok(password_hash)
}

/// Verifies a candidate password against a stored PHC hash string.
///
/// Uses the Argon2 library's constant-time verification; a malformed
/// stored hash is an error, a mismatching password is `Ok(false)`.
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool> {
    let parsed_hash = PasswordHash::new(password_hash)
        .map_err(|e| eyre::eyre!("Invalid password hash: {}", e))?;

    let is_valid = Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok();

    Ok(is_valid)
}

/// Mints an opaque session token: 32 random bytes, hex-encoded.
pub fn generate_session_token() -> String {
    let mut bytes = [0u8; 32];
    rand::rngs::OsRng.fill_bytes(&mut bytes);
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Extracts the bearer token from the Authorization header, if any.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// Resolves the session user for a request.
///
/// Fails with an authentication error when the token is missing, unknown,
/// or expired.
pub async fn current_user(state: &ApiState, headers: &HeaderMap) -> NobatResult<CurrentUser> {
    let token = bearer_token(headers)
        .ok_or_else(|| NobatError::Authentication("missing session token".to_string()))?;

    let session = nobat_db::repositories::session::get_session(&state.db_pool, token)
        .await
        .map_err(NobatError::Database)?
        .ok_or_else(|| NobatError::Authentication("invalid session token".to_string()))?;

    if session.expires_at < Utc::now() {
        return Err(NobatError::Authentication("session expired".to_string()));
    }

    let user = nobat_db::repositories::user::get_user_by_id(&state.db_pool, session.user_id)
        .await
        .map_err(NobatError::Database)?
        .ok_or_else(|| NobatError::Authentication("invalid session token".to_string()))?;

    Ok(CurrentUser {
        id: user.id,
        username: user.username,
        is_admin: user.is_admin,
    })
}

/// Like [`current_user`], but anonymous requests are allowed through.
/// A presented-but-invalid token is still rejected.
pub async fn optional_user(
    state: &ApiState,
    headers: &HeaderMap,
) -> NobatResult<Option<CurrentUser>> {
    match bearer_token(headers) {
        None => Ok(None),
        Some(_) => current_user(state, headers).await.map(Some),
    }
}

/// Gate for admin-only operations.
pub fn require_admin(user: &CurrentUser) -> NobatResult<()> {
    if user.is_admin {
        Ok(())
    } else {
        Err(NobatError::Authorization("admin access required".to_string()))
    }
}
