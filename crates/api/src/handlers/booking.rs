//! Public booking handlers.
//!
//! The booking flow runs in a fixed order: field checks first, then
//! consultant lookup by the submitted name, then the schedule match
//! against the consultant's working days and hours. The first failing
//! rule decides the rejection message.

use axum::{extract::State, http::HeaderMap, Json};
use chrono::Local;
use nobat_core::{
    errors::NobatError,
    models::appointment::{CreateAppointmentRequest, CreateAppointmentResponse, TodayAppointmentsResponse},
    models::consultant::ConsultantResponse,
    validation,
};
use rand::Rng;
use std::sync::Arc;

use crate::{
    middleware::{auth, error_handling::AppError},
    ApiState,
};

/// Draws a 4-digit confirmation number, uniform in [1000, 9999].
///
/// Numbers are a claim ticket for the front desk, not an identifier:
/// collisions are possible and accepted.
pub fn confirmation_number() -> String {
    rand::thread_rng().gen_range(1000..=9999).to_string()
}

/// Consultant roster backing the booking form's selection list.
#[axum::debug_handler]
pub async fn booking_form(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<ConsultantResponse>>, AppError> {
    let consultants = nobat_db::repositories::consultant::list_consultants(&state.db_pool)
        .await
        .map_err(NobatError::Database)?;

    Ok(Json(
        consultants.iter().map(super::consultant_response).collect(),
    ))
}

#[axum::debug_handler]
pub async fn book(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
    Json(payload): Json<CreateAppointmentRequest>,
) -> Result<Json<CreateAppointmentResponse>, AppError> {
    // Anonymous bookings are allowed; a presented token must still be valid
    let user = auth::optional_user(&state, &headers).await?;

    let fields = validation::validate_fields(&payload)?;

    let consultant = nobat_db::repositories::consultant::get_consultant_by_name(
        &state.db_pool,
        payload.consultant.trim(),
    )
    .await
    .map_err(NobatError::Database)?
    .ok_or_else(|| NobatError::Validation("consultant not found".to_string()))?;

    let scheduled_at =
        validation::validate_schedule(&payload.date, &super::consultant_model(&consultant))?;

    let appointment_number = confirmation_number();

    let appointment = nobat_db::repositories::appointment::create_appointment(
        &state.db_pool,
        user.map(|u| u.id),
        &fields.name,
        &fields.phone_number,
        fields.age,
        &fields.education,
        &fields.national_id,
        consultant.id,
        scheduled_at,
        &appointment_number,
    )
    .await
    .map_err(NobatError::Database)?;

    tracing::info!(
        "Booked appointment {} with consultant {} at {}",
        appointment.id,
        consultant.name,
        scheduled_at
    );

    Ok(Json(CreateAppointmentResponse {
        id: appointment.id,
        appointment_number: appointment.appointment_number,
        confirmed: appointment.confirmed,
    }))
}

/// Appointments whose slot falls on the server's current date.
#[axum::debug_handler]
pub async fn today_appointments(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<TodayAppointmentsResponse>, AppError> {
    let today = Local::now().date_naive();

    let appointments =
        nobat_db::repositories::appointment::list_appointments_for_day(&state.db_pool, today)
            .await
            .map_err(NobatError::Database)?;

    Ok(Json(TodayAppointmentsResponse {
        date: today.format("%Y-%m-%d").to_string(),
        appointments: appointments
            .into_iter()
            .map(super::appointment_response)
            .collect(),
    }))
}
