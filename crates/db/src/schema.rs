use eyre::Result;
use sqlx::{Executor, Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create participants table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS participants (
            id UUID PRIMARY KEY,
            seq BIGSERIAL NOT NULL,
            name VARCHAR(255) NOT NULL,
            slots VARCHAR(64) NOT NULL DEFAULT '',
            submitted_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create absences table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS absences (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            seq BIGSERIAL NOT NULL,
            name VARCHAR(255) NOT NULL,
            reason TEXT NOT NULL DEFAULT '',
            submitted_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create attendance table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS attendance (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            seq BIGSERIAL NOT NULL,
            name VARCHAR(255) NOT NULL,
            court VARCHAR(32) NOT NULL,
            team VARCHAR(16) NOT NULL,
            time_slot VARCHAR(16) NOT NULL,
            checked_in_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes; several statements, so this goes through the simple query protocol
    pool.execute(
        r#"
        CREATE INDEX IF NOT EXISTS idx_participants_seq ON participants(seq);
        CREATE INDEX IF NOT EXISTS idx_absences_seq ON absences(seq);
        CREATE INDEX IF NOT EXISTS idx_attendance_seq ON attendance(seq);
        CREATE INDEX IF NOT EXISTS idx_attendance_name ON attendance(name);
        "#,
    )
    .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}
