use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create users table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            username VARCHAR(100) NOT NULL UNIQUE,
            password_hash VARCHAR(255) NOT NULL,
            is_admin BOOLEAN NOT NULL DEFAULT FALSE,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create consultants table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS consultants (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(100) NOT NULL,
            specialty VARCHAR(100) NOT NULL,
            time_start TIME NOT NULL,
            time_end TIME NOT NULL,
            days TEXT NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_working_hours CHECK (time_start <= time_end)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create appointments table. No uniqueness on (consultant_id, scheduled_at)
    // or on appointment_number: overlapping bookings are allowed.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS appointments (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            user_id UUID NULL REFERENCES users(id),
            name VARCHAR(100) NOT NULL,
            phone_number VARCHAR(15) NOT NULL,
            age INTEGER NOT NULL,
            education VARCHAR(100) NOT NULL,
            national_id VARCHAR(15) NOT NULL,
            consultant_id UUID NOT NULL REFERENCES consultants(id),
            scheduled_at TIMESTAMP NOT NULL,
            confirmed BOOLEAN NOT NULL DEFAULT FALSE,
            appointment_number VARCHAR(4) NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create sessions table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS sessions (
            token VARCHAR(64) PRIMARY KEY,
            user_id UUID NOT NULL REFERENCES users(id),
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            expires_at TIMESTAMP WITH TIME ZONE NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_appointments_user_id ON appointments(user_id);
        CREATE INDEX IF NOT EXISTS idx_appointments_consultant_id ON appointments(consultant_id);
        CREATE INDEX IF NOT EXISTS idx_appointments_scheduled_at ON appointments(scheduled_at);
        CREATE INDEX IF NOT EXISTS idx_consultants_name ON consultants(name);
        CREATE INDEX IF NOT EXISTS idx_sessions_user_id ON sessions(user_id);
        CREATE INDEX IF NOT EXISTS idx_sessions_expires_at ON sessions(expires_at);
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}
