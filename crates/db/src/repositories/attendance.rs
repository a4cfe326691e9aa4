use crate::models::DbAttendance;
use chrono::{DateTime, Utc};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_attendance(
    pool: &Pool<Postgres>,
    name: &str,
    court: &str,
    team: &str,
    time_slot: &str,
    checked_in_at: DateTime<Utc>,
) -> Result<DbAttendance> {
    let id = Uuid::new_v4();

    tracing::debug!(
        "Recording check-in: name={}, court={}, team={}, slot={}",
        name, court, team, time_slot
    );

    let attendance = sqlx::query_as::<_, DbAttendance>(
        r#"
        INSERT INTO attendance (id, name, court, team, time_slot, checked_in_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, name, court, team, time_slot, checked_in_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(court)
    .bind(team)
    .bind(time_slot)
    .bind(checked_in_at)
    .fetch_one(pool)
    .await?;

    Ok(attendance)
}

pub async fn get_all_attendance(pool: &Pool<Postgres>) -> Result<Vec<DbAttendance>> {
    let attendance = sqlx::query_as::<_, DbAttendance>(
        r#"
        SELECT id, name, court, team, time_slot, checked_in_at
        FROM attendance
        ORDER BY seq ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(attendance)
}
