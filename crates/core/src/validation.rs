//! Booking-form validation.
//!
//! Rules are applied in a fixed order and the first failure wins, so the
//! caller always gets the single most relevant rejection. Field checks
//! (name, phone, national id, age, education) run before the consultant
//! is resolved; the schedule checks (weekday, working hours) run against
//! the resolved consultant.

use chrono::{NaiveDateTime, NaiveTime};

use crate::errors::{NobatError, NobatResult};
use crate::models::appointment::CreateAppointmentRequest;
use crate::models::consultant::{normalize_weekday, Consultant, CreateConsultantRequest};

/// Format accepted for the requested slot, e.g. "2024-05-06T10:00".
pub const DATE_TIME_FMT: &str = "%Y-%m-%dT%H:%M";

/// Format accepted for consultant working-hour bounds.
pub const TIME_FMT: &str = "%H:%M";

/// Accepted education levels: canonical token plus the Persian form
/// label it is posted as.
pub const EDUCATION_LEVELS: [(&str, &str); 5] = [
    ("diploma", "دیپلم"),
    ("associate", "کاردانی"),
    ("bachelor", "کارشناسی"),
    ("master", "کارشناسی ارشد"),
    ("doctorate", "دکترا"),
];

/// Booking fields that survived every rule, ready to persist.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidBooking {
    pub name: String,
    pub phone_number: String,
    pub age: i32,
    pub education: String,
    pub national_id: String,
    pub scheduled_at: NaiveDateTime,
}

/// Field checks in submission order: name, phone, national id, age, education.
#[derive(Debug)]
pub struct BookingFields {
    pub name: String,
    pub phone_number: String,
    pub age: i32,
    pub education: String,
    pub national_id: String,
}

fn all_ascii_digits(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

/// Maps an education value to its canonical token, accepting both the
/// English tokens and the Persian form labels.
pub fn canonical_education(value: &str) -> Option<&'static str> {
    let value = value.trim();
    EDUCATION_LEVELS
        .iter()
        .find(|(token, label)| token.eq_ignore_ascii_case(value) || *label == value)
        .map(|(token, _)| *token)
}

/// Validates the citizen-supplied fields of a booking request.
pub fn validate_fields(request: &CreateAppointmentRequest) -> NobatResult<BookingFields> {
    let name = request.name.trim();
    if name.chars().count() < 2 {
        return Err(NobatError::Validation("name too short".to_string()));
    }

    let phone = request.phone_number.trim();
    if phone.len() != 11 || !all_ascii_digits(phone) || !phone.starts_with("09") {
        return Err(NobatError::Validation("invalid phone format".to_string()));
    }

    let national_id = request.national_id.trim();
    if national_id.len() != 10 || !all_ascii_digits(national_id) {
        return Err(NobatError::Validation("invalid national id".to_string()));
    }

    let age: i32 = request
        .age
        .trim()
        .parse()
        .map_err(|_| NobatError::Validation("invalid age".to_string()))?;
    if !(1..=120).contains(&age) {
        return Err(NobatError::Validation("invalid age".to_string()));
    }

    let education = canonical_education(&request.education)
        .ok_or_else(|| NobatError::Validation("invalid education level".to_string()))?;

    Ok(BookingFields {
        name: name.to_string(),
        phone_number: phone.to_string(),
        age,
        education: education.to_string(),
        national_id: national_id.to_string(),
    })
}

/// Validates the requested slot against the consultant's weekly window.
///
/// Parses the date-time, then requires the weekday to be one of the
/// consultant's working days and the time of day to fall inside
/// [time_start, time_end], both bounds inclusive.
pub fn validate_schedule(
    date: &str,
    consultant: &Consultant,
) -> NobatResult<NaiveDateTime> {
    let scheduled_at = NaiveDateTime::parse_from_str(date.trim(), DATE_TIME_FMT)
        .map_err(|_| NobatError::Validation("invalid date/time".to_string()))?;

    let weekday = scheduled_at.format("%A").to_string();
    let works_that_day = consultant
        .days
        .iter()
        .any(|day| day.eq_ignore_ascii_case(&weekday));
    if !works_that_day {
        return Err(NobatError::Validation(format!(
            "consultant does not work on {}; working days: {}",
            weekday,
            consultant.days.join(", ")
        )));
    }

    let time = scheduled_at.time();
    if time < consultant.time_start || time > consultant.time_end {
        return Err(NobatError::Validation(format!(
            "requested time {} is outside working hours {} to {}",
            time.format(TIME_FMT),
            consultant.time_start.format(TIME_FMT),
            consultant.time_end.format(TIME_FMT),
        )));
    }

    Ok(scheduled_at)
}

/// Runs the full rule chain against an already-resolved consultant.
pub fn validate_booking(
    request: &CreateAppointmentRequest,
    consultant: &Consultant,
) -> NobatResult<ValidBooking> {
    let fields = validate_fields(request)?;
    let scheduled_at = validate_schedule(&request.date, consultant)?;

    Ok(ValidBooking {
        name: fields.name,
        phone_number: fields.phone_number,
        age: fields.age,
        education: fields.education,
        national_id: fields.national_id,
        scheduled_at,
    })
}

/// Normalized consultant fields ready to persist.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidConsultant {
    pub name: String,
    pub specialty: String,
    pub time_start: NaiveTime,
    pub time_end: NaiveTime,
    pub days: Vec<String>,
}

/// Validates a consultant create/edit submission.
///
/// Weekday names and the `time_start <= time_end` invariant are checked
/// up front so a bad roster entry cannot silently reject every later
/// booking.
pub fn validate_consultant(request: &CreateConsultantRequest) -> NobatResult<ValidConsultant> {
    let name = request.name.trim();
    if name.is_empty() {
        return Err(NobatError::Validation("consultant name is required".to_string()));
    }

    let specialty = request.specialty.trim();
    if specialty.is_empty() {
        return Err(NobatError::Validation("specialty is required".to_string()));
    }

    let time_start = NaiveTime::parse_from_str(request.time_start.trim(), TIME_FMT)
        .map_err(|_| NobatError::Validation("invalid start time".to_string()))?;
    let time_end = NaiveTime::parse_from_str(request.time_end.trim(), TIME_FMT)
        .map_err(|_| NobatError::Validation("invalid end time".to_string()))?;
    if time_start > time_end {
        return Err(NobatError::Validation(
            "start time must not be after end time".to_string(),
        ));
    }

    if request.days.is_empty() {
        return Err(NobatError::Validation(
            "at least one working day is required".to_string(),
        ));
    }
    let mut days = Vec::with_capacity(request.days.len());
    for day in &request.days {
        let canonical = normalize_weekday(day)
            .ok_or_else(|| NobatError::Validation(format!("unknown weekday: {}", day)))?;
        if !days.iter().any(|d: &String| d == canonical) {
            days.push(canonical.to_string());
        }
    }

    Ok(ValidConsultant {
        name: name.to_string(),
        specialty: specialty.to_string(),
        time_start,
        time_end,
        days,
    })
}
