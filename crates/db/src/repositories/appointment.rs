use crate::models::{DbAppointment, DbAppointmentDetail};
use chrono::{Duration, NaiveDate, NaiveDateTime, Utc};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

const DETAIL_COLUMNS: &str = r#"
    a.id, a.user_id, a.name, a.phone_number, a.age, a.education, a.national_id,
    a.consultant_id, c.name AS consultant_name, a.scheduled_at, a.confirmed,
    a.appointment_number, a.created_at
"#;

#[allow(clippy::too_many_arguments)]
pub async fn create_appointment(
    pool: &Pool<Postgres>,
    user_id: Option<Uuid>,
    name: &str,
    phone_number: &str,
    age: i32,
    education: &str,
    national_id: &str,
    consultant_id: Uuid,
    scheduled_at: NaiveDateTime,
    appointment_number: &str,
) -> Result<DbAppointment> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating appointment: id={}, consultant_id={}, scheduled_at={}",
        id,
        consultant_id,
        scheduled_at
    );

    let appointment = sqlx::query_as::<_, DbAppointment>(
        r#"
        INSERT INTO appointments (
            id, user_id, name, phone_number, age, education, national_id,
            consultant_id, scheduled_at, confirmed, appointment_number, created_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, FALSE, $10, $11)
        RETURNING id, user_id, name, phone_number, age, education, national_id,
                  consultant_id, scheduled_at, confirmed, appointment_number, created_at
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(name)
    .bind(phone_number)
    .bind(age)
    .bind(education)
    .bind(national_id)
    .bind(consultant_id)
    .bind(scheduled_at)
    .bind(appointment_number)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(appointment)
}

pub async fn list_appointments(pool: &Pool<Postgres>) -> Result<Vec<DbAppointmentDetail>> {
    let appointments = sqlx::query_as::<_, DbAppointmentDetail>(&format!(
        r#"
        SELECT {DETAIL_COLUMNS}
        FROM appointments a
        JOIN consultants c ON c.id = a.consultant_id
        ORDER BY a.scheduled_at ASC
        "#,
    ))
    .fetch_all(pool)
    .await?;

    Ok(appointments)
}

pub async fn list_appointments_by_user(
    pool: &Pool<Postgres>,
    user_id: Uuid,
) -> Result<Vec<DbAppointmentDetail>> {
    let appointments = sqlx::query_as::<_, DbAppointmentDetail>(&format!(
        r#"
        SELECT {DETAIL_COLUMNS}
        FROM appointments a
        JOIN consultants c ON c.id = a.consultant_id
        WHERE a.user_id = $1
        ORDER BY a.scheduled_at ASC
        "#,
    ))
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(appointments)
}

/// All appointments whose slot falls on the given calendar day.
pub async fn list_appointments_for_day(
    pool: &Pool<Postgres>,
    day: NaiveDate,
) -> Result<Vec<DbAppointmentDetail>> {
    let day_start = day.and_time(chrono::NaiveTime::MIN);
    let day_end = day_start + Duration::days(1);

    let appointments = sqlx::query_as::<_, DbAppointmentDetail>(&format!(
        r#"
        SELECT {DETAIL_COLUMNS}
        FROM appointments a
        JOIN consultants c ON c.id = a.consultant_id
        WHERE a.scheduled_at >= $1 AND a.scheduled_at < $2
        ORDER BY a.scheduled_at ASC
        "#,
    ))
    .bind(day_start)
    .bind(day_end)
    .fetch_all(pool)
    .await?;

    Ok(appointments)
}

/// Marks an appointment confirmed. Confirming twice is a no-op.
/// Returns false when no appointment with the given id existed.
pub async fn confirm_appointment(pool: &Pool<Postgres>, id: Uuid) -> Result<bool> {
    tracing::debug!("Confirming appointment: id={}", id);

    let result = sqlx::query(
        r#"
        UPDATE appointments
        SET confirmed = TRUE
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Hard delete. Returns false when no appointment with the given id existed.
pub async fn delete_appointment(pool: &Pool<Postgres>, id: Uuid) -> Result<bool> {
    tracing::debug!("Deleting appointment: id={}", id);

    let result = sqlx::query(
        r#"
        DELETE FROM appointments
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
