//! # External Stores
//!
//! The roster, absentee and attendance stores are append-only row stores that
//! also support a full read in insertion order. They are the durability
//! boundary: the session's working copy is rebuilt from them after a restart.
//!
//! Implementations report failures as `eyre` reports; the session wraps them
//! in [`CourtError::Store`](crate::errors::CourtError::Store) without retrying.

pub mod memory;

use std::sync::Arc;

use async_trait::async_trait;
use eyre::Result;

use crate::models::{
    attendance::AttendanceRow,
    participant::{AbsenceRow, ParticipantRow},
};

#[async_trait]
pub trait RosterStore: Send + Sync {
    async fn append_participant(&self, row: &ParticipantRow) -> Result<()>;

    async fn read_all_participants(&self) -> Result<Vec<ParticipantRow>>;
}

#[async_trait]
pub trait AbsenceStore: Send + Sync {
    async fn append_absence(&self, row: &AbsenceRow) -> Result<()>;

    async fn read_all_absences(&self) -> Result<Vec<AbsenceRow>>;
}

#[async_trait]
pub trait AttendanceStore: Send + Sync {
    async fn append_attendance(&self, row: &AttendanceRow) -> Result<()>;

    async fn read_all_attendance(&self) -> Result<Vec<AttendanceRow>>;
}

/// Handles to the three stores a session reads from and writes through to.
#[derive(Clone)]
pub struct Stores {
    pub roster: Arc<dyn RosterStore>,
    pub absences: Arc<dyn AbsenceStore>,
    pub attendance: Arc<dyn AttendanceStore>,
}

impl Stores {
    /// Uses one backend for all three stores.
    pub fn shared<T>(backend: Arc<T>) -> Self
    where
        T: RosterStore + AbsenceStore + AttendanceStore + 'static,
    {
        Self {
            roster: backend.clone(),
            absences: backend.clone(),
            attendance: backend,
        }
    }
}
