//! Admin handlers: appointment review and consultant roster management.
//!
//! Every handler re-checks the session user's admin flag at entry; a
//! non-admin is redirected to the landing page by the error mapping
//! rather than given a 403.

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    Json,
};
use nobat_core::{
    errors::NobatError,
    models::appointment::{AppointmentResponse, ConfirmAppointmentResponse},
    models::consultant::{join_days, ConsultantResponse, CreateConsultantRequest, UpdateConsultantRequest},
    models::user::MessageResponse,
    validation,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    middleware::{auth, error_handling::AppError},
    ApiState,
};

#[axum::debug_handler]
pub async fn list_appointments(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<AppointmentResponse>>, AppError> {
    let user = auth::current_user(&state, &headers).await?;
    auth::require_admin(&user)?;

    let appointments = nobat_db::repositories::appointment::list_appointments(&state.db_pool)
        .await
        .map_err(NobatError::Database)?;

    Ok(Json(
        appointments
            .into_iter()
            .map(super::appointment_response)
            .collect(),
    ))
}

#[axum::debug_handler]
pub async fn confirm_appointment(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<Json<ConfirmAppointmentResponse>, AppError> {
    let user = auth::current_user(&state, &headers).await?;
    auth::require_admin(&user)?;

    // Idempotent: confirming a confirmed appointment changes nothing
    let found = nobat_db::repositories::appointment::confirm_appointment(&state.db_pool, id)
        .await
        .map_err(NobatError::Database)?;
    if !found {
        return Err(AppError(NobatError::NotFound(format!(
            "Appointment with ID {} not found",
            id
        ))));
    }

    Ok(Json(ConfirmAppointmentResponse {
        id,
        confirmed: true,
    }))
}

#[axum::debug_handler]
pub async fn cancel_appointment(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    let user = auth::current_user(&state, &headers).await?;
    auth::require_admin(&user)?;

    let found = nobat_db::repositories::appointment::delete_appointment(&state.db_pool, id)
        .await
        .map_err(NobatError::Database)?;
    if !found {
        return Err(AppError(NobatError::NotFound(format!(
            "Appointment with ID {} not found",
            id
        ))));
    }

    Ok(Json(MessageResponse {
        message: "appointment canceled".to_string(),
    }))
}

#[axum::debug_handler]
pub async fn list_consultants(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<ConsultantResponse>>, AppError> {
    let user = auth::current_user(&state, &headers).await?;
    auth::require_admin(&user)?;

    let consultants = nobat_db::repositories::consultant::list_consultants(&state.db_pool)
        .await
        .map_err(NobatError::Database)?;

    Ok(Json(
        consultants.iter().map(super::consultant_response).collect(),
    ))
}

#[axum::debug_handler]
pub async fn create_consultant(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
    Json(payload): Json<CreateConsultantRequest>,
) -> Result<Json<ConsultantResponse>, AppError> {
    let user = auth::current_user(&state, &headers).await?;
    auth::require_admin(&user)?;

    let valid = validation::validate_consultant(&payload)?;

    let consultant = nobat_db::repositories::consultant::create_consultant(
        &state.db_pool,
        &valid.name,
        &valid.specialty,
        valid.time_start,
        valid.time_end,
        &join_days(&valid.days),
    )
    .await
    .map_err(NobatError::Database)?;

    tracing::info!("Consultant added: {}", consultant.name);

    Ok(Json(super::consultant_response(&consultant)))
}

#[axum::debug_handler]
pub async fn get_consultant(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<Json<ConsultantResponse>, AppError> {
    let user = auth::current_user(&state, &headers).await?;
    auth::require_admin(&user)?;

    let consultant = nobat_db::repositories::consultant::get_consultant_by_id(&state.db_pool, id)
        .await
        .map_err(NobatError::Database)?
        .ok_or_else(|| {
            NobatError::NotFound(format!("Consultant with ID {} not found", id))
        })?;

    Ok(Json(super::consultant_response(&consultant)))
}

#[axum::debug_handler]
pub async fn update_consultant(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateConsultantRequest>,
) -> Result<Json<ConsultantResponse>, AppError> {
    let user = auth::current_user(&state, &headers).await?;
    auth::require_admin(&user)?;

    let valid = validation::validate_consultant(&payload)?;

    let consultant = nobat_db::repositories::consultant::update_consultant(
        &state.db_pool,
        id,
        &valid.name,
        &valid.specialty,
        valid.time_start,
        valid.time_end,
        &join_days(&valid.days),
    )
    .await
    .map_err(NobatError::Database)?
    .ok_or_else(|| NobatError::NotFound(format!("Consultant with ID {} not found", id)))?;

    tracing::info!("Consultant updated: {}", consultant.name);

    Ok(Json(super::consultant_response(&consultant)))
}

#[axum::debug_handler]
pub async fn delete_consultant(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    let user = auth::current_user(&state, &headers).await?;
    auth::require_admin(&user)?;

    let found = nobat_db::repositories::consultant::delete_consultant(&state.db_pool, id)
        .await
        .map_err(NobatError::Database)?;
    if !found {
        return Err(AppError(NobatError::NotFound(format!(
            "Consultant with ID {} not found",
            id
        ))));
    }

    Ok(Json(MessageResponse {
        message: "consultant deleted".to_string(),
    }))
}
