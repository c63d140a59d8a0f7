use axum::{extract::State, http::HeaderMap, Json};
use chrono::{Duration, Utc};
use nobat_core::{
    errors::NobatError,
    models::appointment::AppointmentResponse,
    models::user::{
        LoginRequest, LoginResponse, MessageResponse, RegisterRequest, RegisterResponse,
    },
};
use std::sync::Arc;

use crate::{
    middleware::{auth, error_handling::AppError},
    ApiState,
};

#[axum::debug_handler]
pub async fn register(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>, AppError> {
    let username = payload.username.trim();
    if username.is_empty() {
        return Err(AppError(NobatError::Validation(
            "username is required".to_string(),
        )));
    }
    if payload.password.is_empty() {
        return Err(AppError(NobatError::Validation(
            "password is required".to_string(),
        )));
    }

    // The UNIQUE constraint on username is the real guard; this check
    // just turns the common case into a friendly message.
    let existing = nobat_db::repositories::user::get_user_by_username(&state.db_pool, username)
        .await
        .map_err(NobatError::Database)?;
    if existing.is_some() {
        return Err(AppError(NobatError::Validation(
            "username already taken".to_string(),
        )));
    }

    let password_hash = auth::hash_password(&payload.password).map_err(NobatError::Database)?;

    let user =
        nobat_db::repositories::user::create_user(&state.db_pool, username, &password_hash, false)
            .await
            .map_err(NobatError::Database)?;

    tracing::info!("Registered user: {}", user.username);

    Ok(Json(RegisterResponse {
        id: user.id,
        username: user.username,
    }))
}

#[axum::debug_handler]
pub async fn login(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    // Opportunistic cleanup of stale sessions
    nobat_db::repositories::session::delete_expired_sessions(&state.db_pool)
        .await
        .map_err(NobatError::Database)?;

    // One generic message for unknown user and wrong password alike,
    // so usernames cannot be probed through the login form.
    let invalid =
        || NobatError::Authentication("invalid username or password".to_string());

    let user =
        nobat_db::repositories::user::get_user_by_username(&state.db_pool, payload.username.trim())
            .await
            .map_err(NobatError::Database)?
            .ok_or_else(invalid)?;

    let is_valid = auth::verify_password(&payload.password, &user.password_hash)
        .map_err(NobatError::Database)?;
    if !is_valid {
        return Err(AppError(invalid()));
    }

    let token = auth::generate_session_token();
    let expires_at = Utc::now() + Duration::hours(state.session_ttl_hours);
    nobat_db::repositories::session::create_session(&state.db_pool, &token, user.id, expires_at)
        .await
        .map_err(NobatError::Database)?;

    tracing::info!("User logged in: {}", user.username);

    Ok(Json(LoginResponse {
        token,
        username: user.username,
        is_admin: user.is_admin,
    }))
}

#[axum::debug_handler]
pub async fn logout(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
) -> Result<Json<MessageResponse>, AppError> {
    // Only a valid session can be logged out
    let user = auth::current_user(&state, &headers).await?;

    if let Some(token) = auth::bearer_token(&headers) {
        nobat_db::repositories::session::delete_session(&state.db_pool, token)
            .await
            .map_err(NobatError::Database)?;
    }

    tracing::info!("User logged out: {}", user.username);

    Ok(Json(MessageResponse {
        message: "logged out".to_string(),
    }))
}

#[axum::debug_handler]
pub async fn profile(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<AppointmentResponse>>, AppError> {
    let user = auth::current_user(&state, &headers).await?;

    let appointments =
        nobat_db::repositories::appointment::list_appointments_by_user(&state.db_pool, user.id)
            .await
            .map_err(NobatError::Database)?;

    Ok(Json(
        appointments
            .into_iter()
            .map(super::appointment_response)
            .collect(),
    ))
}
