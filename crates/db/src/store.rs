//! PostgreSQL-backed implementation of the roster, absentee and attendance stores.

use async_trait::async_trait;
use courtside_core::{
    models::{
        attendance::AttendanceRow,
        participant::{AbsenceRow, ParticipantRow},
    },
    store::{AbsenceStore, AttendanceStore, RosterStore},
};
use eyre::Result;

use crate::{
    DbPool,
    repositories::{attendance, roster},
};

/// All three stores over one connection pool. Rows read back in insertion order.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RosterStore for PgStore {
    async fn append_participant(&self, row: &ParticipantRow) -> Result<()> {
        roster::create_participant(&self.pool, row.id, &row.name, &row.slots, row.submitted_at)
            .await?;
        Ok(())
    }

    async fn read_all_participants(&self) -> Result<Vec<ParticipantRow>> {
        let rows = roster::get_all_participants(&self.pool).await?;
        Ok(rows.into_iter().map(ParticipantRow::from).collect())
    }
}

#[async_trait]
impl AbsenceStore for PgStore {
    async fn append_absence(&self, row: &AbsenceRow) -> Result<()> {
        roster::create_absence(&self.pool, &row.name, &row.reason, row.submitted_at).await?;
        Ok(())
    }

    async fn read_all_absences(&self) -> Result<Vec<AbsenceRow>> {
        let rows = roster::get_all_absences(&self.pool).await?;
        Ok(rows.into_iter().map(AbsenceRow::from).collect())
    }
}

#[async_trait]
impl AttendanceStore for PgStore {
    async fn append_attendance(&self, row: &AttendanceRow) -> Result<()> {
        attendance::create_attendance(
            &self.pool,
            &row.name,
            &row.court,
            &row.team,
            &row.slot,
            row.checked_in_at,
        )
        .await?;
        Ok(())
    }

    async fn read_all_attendance(&self) -> Result<Vec<AttendanceRow>> {
        let rows = attendance::get_all_attendance(&self.pool).await?;
        Ok(rows.into_iter().map(AttendanceRow::from).collect())
    }
}
