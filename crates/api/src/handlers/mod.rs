pub mod admin;
pub mod auth;
pub mod booking;

use nobat_core::models::appointment::AppointmentResponse;
use nobat_core::models::consultant::{split_days, Consultant, ConsultantResponse};
use nobat_core::validation::TIME_FMT;
use nobat_db::models::{DbAppointmentDetail, DbConsultant};

/// Builds the domain consultant from its storage row.
pub fn consultant_model(db: &DbConsultant) -> Consultant {
    Consultant {
        id: db.id,
        name: db.name.clone(),
        specialty: db.specialty.clone(),
        time_start: db.time_start,
        time_end: db.time_end,
        days: split_days(&db.days),
        created_at: db.created_at,
    }
}

pub fn consultant_response(db: &DbConsultant) -> ConsultantResponse {
    ConsultantResponse {
        id: db.id,
        name: db.name.clone(),
        specialty: db.specialty.clone(),
        time_start: db.time_start.format(TIME_FMT).to_string(),
        time_end: db.time_end.format(TIME_FMT).to_string(),
        days: split_days(&db.days),
    }
}

pub fn appointment_response(db: DbAppointmentDetail) -> AppointmentResponse {
    AppointmentResponse {
        id: db.id,
        name: db.name,
        phone_number: db.phone_number,
        age: db.age,
        education: db.education,
        national_id: db.national_id,
        consultant: db.consultant_name,
        scheduled_at: db.scheduled_at,
        confirmed: db.confirmed,
        appointment_number: db.appointment_number,
    }
}
