use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Canonical English weekday names, in the order `chrono` formats them.
/// The `days` column stores a comma-joined subset of these.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// A service provider with a recurring weekly availability window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Consultant {
    pub id: Uuid,
    pub name: String,
    pub specialty: String,
    pub time_start: NaiveTime,
    pub time_end: NaiveTime,
    pub days: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateConsultantRequest {
    pub name: String,
    pub specialty: String,
    /// Daily window start, "HH:MM".
    pub time_start: String,
    /// Daily window end, "HH:MM".
    pub time_end: String,
    /// Selected weekday names, as posted by the roster form checkboxes.
    pub days: Vec<String>,
}

/// Edits carry the full field set, matching the edit form.
pub type UpdateConsultantRequest = CreateConsultantRequest;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsultantResponse {
    pub id: Uuid,
    pub name: String,
    pub specialty: String,
    pub time_start: String,
    pub time_end: String,
    pub days: Vec<String>,
}

/// Normalizes a weekday name to its canonical capitalized form.
/// Returns `None` for anything that is not one of the seven weekdays.
pub fn normalize_weekday(name: &str) -> Option<&'static str> {
    let name = name.trim();
    WEEKDAY_NAMES
        .iter()
        .find(|day| day.eq_ignore_ascii_case(name))
        .copied()
}

/// Splits a stored comma-joined `days` value into its weekday names.
pub fn split_days(days: &str) -> Vec<String> {
    days.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Joins weekday names into the comma-delimited storage form.
pub fn join_days(days: &[String]) -> String {
    days.join(",")
}
