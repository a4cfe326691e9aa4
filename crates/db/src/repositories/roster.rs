use crate::models::{DbAbsence, DbParticipant};
use chrono::{DateTime, Utc};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

// Participant Repository

pub async fn create_participant(
    pool: &Pool<Postgres>,
    id: Uuid,
    name: &str,
    slots: &str,
    submitted_at: DateTime<Utc>,
) -> Result<DbParticipant> {
    tracing::debug!("Creating participant: id={}, name={}, slots={}", id, name, slots);

    let participant = sqlx::query_as::<_, DbParticipant>(
        r#"
        INSERT INTO participants (id, name, slots, submitted_at)
        VALUES ($1, $2, $3, $4)
        RETURNING id, name, slots, submitted_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(slots)
    .bind(submitted_at)
    .fetch_one(pool)
    .await?;

    Ok(participant)
}

pub async fn get_all_participants(pool: &Pool<Postgres>) -> Result<Vec<DbParticipant>> {
    let participants = sqlx::query_as::<_, DbParticipant>(
        r#"
        SELECT id, name, slots, submitted_at
        FROM participants
        ORDER BY seq ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    tracing::debug!("Loaded {} participants", participants.len());
    Ok(participants)
}

// Absence Repository

pub async fn create_absence(
    pool: &Pool<Postgres>,
    name: &str,
    reason: &str,
    submitted_at: DateTime<Utc>,
) -> Result<DbAbsence> {
    let id = Uuid::new_v4();

    let absence = sqlx::query_as::<_, DbAbsence>(
        r#"
        INSERT INTO absences (id, name, reason, submitted_at)
        VALUES ($1, $2, $3, $4)
        RETURNING id, name, reason, submitted_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(reason)
    .bind(submitted_at)
    .fetch_one(pool)
    .await?;

    Ok(absence)
}

pub async fn get_all_absences(pool: &Pool<Postgres>) -> Result<Vec<DbAbsence>> {
    let absences = sqlx::query_as::<_, DbAbsence>(
        r#"
        SELECT id, name, reason, submitted_at
        FROM absences
        ORDER BY seq ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(absences)
}
