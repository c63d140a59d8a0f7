use chrono::{DateTime, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbUser {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbConsultant {
    pub id: Uuid,
    pub name: String,
    pub specialty: String,
    pub time_start: NaiveTime,
    pub time_end: NaiveTime,
    /// Comma-joined weekday names.
    pub days: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbAppointment {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub name: String,
    pub phone_number: String,
    pub age: i32,
    pub education: String,
    pub national_id: String,
    pub consultant_id: Uuid,
    pub scheduled_at: NaiveDateTime,
    pub confirmed: bool,
    pub appointment_number: String,
    pub created_at: DateTime<Utc>,
}

/// Appointment row joined with the consultant's display name.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbAppointmentDetail {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub name: String,
    pub phone_number: String,
    pub age: i32,
    pub education: String,
    pub national_id: String,
    pub consultant_id: Uuid,
    pub consultant_name: String,
    pub scheduled_at: NaiveDateTime,
    pub confirmed: bool,
    pub appointment_number: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbSession {
    pub token: String,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}
