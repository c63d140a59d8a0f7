use crate::models::DbConsultant;
use chrono::{NaiveTime, Utc};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_consultant(
    pool: &Pool<Postgres>,
    name: &str,
    specialty: &str,
    time_start: NaiveTime,
    time_end: NaiveTime,
    days: &str,
) -> Result<DbConsultant> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let consultant = sqlx::query_as::<_, DbConsultant>(
        r#"
        INSERT INTO consultants (id, name, specialty, time_start, time_end, days, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, name, specialty, time_start, time_end, days, created_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(specialty)
    .bind(time_start)
    .bind(time_end)
    .bind(days)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(consultant)
}

pub async fn list_consultants(pool: &Pool<Postgres>) -> Result<Vec<DbConsultant>> {
    let consultants = sqlx::query_as::<_, DbConsultant>(
        r#"
        SELECT id, name, specialty, time_start, time_end, days, created_at
        FROM consultants
        ORDER BY name ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(consultants)
}

pub async fn get_consultant_by_id(
    pool: &Pool<Postgres>,
    id: Uuid,
) -> Result<Option<DbConsultant>> {
    let consultant = sqlx::query_as::<_, DbConsultant>(
        r#"
        SELECT id, name, specialty, time_start, time_end, days, created_at
        FROM consultants
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(consultant)
}

/// Looks a consultant up by the display name the booking form posts.
/// Names are not unique; the oldest entry wins.
pub async fn get_consultant_by_name(
    pool: &Pool<Postgres>,
    name: &str,
) -> Result<Option<DbConsultant>> {
    let consultant = sqlx::query_as::<_, DbConsultant>(
        r#"
        SELECT id, name, specialty, time_start, time_end, days, created_at
        FROM consultants
        WHERE name = $1
        ORDER BY created_at ASC
        LIMIT 1
        "#,
    )
    .bind(name)
    .fetch_optional(pool)
    .await?;

    Ok(consultant)
}

pub async fn update_consultant(
    pool: &Pool<Postgres>,
    id: Uuid,
    name: &str,
    specialty: &str,
    time_start: NaiveTime,
    time_end: NaiveTime,
    days: &str,
) -> Result<Option<DbConsultant>> {
    let consultant = sqlx::query_as::<_, DbConsultant>(
        r#"
        UPDATE consultants
        SET name = $2, specialty = $3, time_start = $4, time_end = $5, days = $6
        WHERE id = $1
        RETURNING id, name, specialty, time_start, time_end, days, created_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(specialty)
    .bind(time_start)
    .bind(time_end)
    .bind(days)
    .fetch_optional(pool)
    .await?;

    Ok(consultant)
}

/// Returns false when no consultant with the given id existed.
pub async fn delete_consultant(pool: &Pool<Postgres>, id: Uuid) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM consultants
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
