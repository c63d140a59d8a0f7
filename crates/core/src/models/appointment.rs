use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Raw booking form submission. Numeric-looking fields arrive as strings
/// and are checked by the validator, not by deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAppointmentRequest {
    pub name: String,
    pub phone_number: String,
    pub age: String,
    pub education: String,
    pub national_id: String,
    /// Consultant name as selected in the form.
    pub consultant: String,
    /// Requested slot, "YYYY-MM-DDTHH:MM".
    pub date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAppointmentResponse {
    pub id: Uuid,
    /// Four-digit claim ticket shown to the booker.
    pub appointment_number: String,
    pub confirmed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentResponse {
    pub id: Uuid,
    pub name: String,
    pub phone_number: String,
    pub age: i32,
    pub education: String,
    pub national_id: String,
    pub consultant: String,
    pub scheduled_at: NaiveDateTime,
    pub confirmed: bool,
    pub appointment_number: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfirmAppointmentResponse {
    pub id: Uuid,
    pub confirmed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodayAppointmentsResponse {
    pub date: String,
    pub appointments: Vec<AppointmentResponse>,
}
