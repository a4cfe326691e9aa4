use std::sync::{
    Mutex,
    atomic::{AtomicBool, Ordering},
};

use async_trait::async_trait;
use eyre::{Result, eyre};

use crate::{
    models::{
        attendance::AttendanceRow,
        participant::{AbsenceRow, ParticipantRow},
    },
    store::{AbsenceStore, AttendanceStore, RosterStore},
};

/// Process-local store backing all three row sets.
///
/// Used when no database is configured and in tests. Appends can be made to
/// fail with [`MemoryStore::fail_appends`] to exercise store outages.
#[derive(Debug, Default)]
pub struct MemoryStore {
    participants: Mutex<Vec<ParticipantRow>>,
    absences: Mutex<Vec<AbsenceRow>>,
    attendance: Mutex<Vec<AttendanceRow>>,
    failing: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(
        participants: Vec<ParticipantRow>,
        absences: Vec<AbsenceRow>,
        attendance: Vec<AttendanceRow>,
    ) -> Self {
        Self {
            participants: Mutex::new(participants),
            absences: Mutex::new(absences),
            attendance: Mutex::new(attendance),
            failing: AtomicBool::new(false),
        }
    }

    /// While set, every append returns an error and leaves the rows untouched.
    pub fn fail_appends(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(eyre!("memory store is unavailable"));
        }
        Ok(())
    }
}

fn append<T: Clone>(rows: &Mutex<Vec<T>>, row: &T) -> Result<()> {
    rows.lock()
        .map_err(|_| eyre!("memory store lock poisoned"))?
        .push(row.clone());
    Ok(())
}

fn read_all<T: Clone>(rows: &Mutex<Vec<T>>) -> Result<Vec<T>> {
    Ok(rows
        .lock()
        .map_err(|_| eyre!("memory store lock poisoned"))?
        .clone())
}

#[async_trait]
impl RosterStore for MemoryStore {
    async fn append_participant(&self, row: &ParticipantRow) -> Result<()> {
        self.check_available()?;
        append(&self.participants, row)
    }

    async fn read_all_participants(&self) -> Result<Vec<ParticipantRow>> {
        read_all(&self.participants)
    }
}

#[async_trait]
impl AbsenceStore for MemoryStore {
    async fn append_absence(&self, row: &AbsenceRow) -> Result<()> {
        self.check_available()?;
        append(&self.absences, row)
    }

    async fn read_all_absences(&self) -> Result<Vec<AbsenceRow>> {
        read_all(&self.absences)
    }
}

#[async_trait]
impl AttendanceStore for MemoryStore {
    async fn append_attendance(&self, row: &AttendanceRow) -> Result<()> {
        self.check_available()?;
        append(&self.attendance, row)
    }

    async fn read_all_attendance(&self) -> Result<Vec<AttendanceRow>> {
        read_all(&self.attendance)
    }
}
