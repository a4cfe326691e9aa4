use std::{collections::BTreeSet, fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{CourtError, CourtResult};

/// Delimiter used when a participant's slots are flattened into one store column.
pub const SLOT_DELIMITER: &str = ", ";

/// A lunch window a participant can declare availability for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    /// 1:00 to 1:10, before lunch
    Before,
    /// 1:30 to 1:40, after lunch
    After,
}

impl Slot {
    pub const ALL: [Slot; 2] = [Slot::Before, Slot::After];

    pub fn as_str(&self) -> &'static str {
        match self {
            Slot::Before => "before",
            Slot::After => "after",
        }
    }

    /// Joins slots into the single-column form the roster store keeps.
    pub fn join(slots: &BTreeSet<Slot>) -> String {
        slots
            .iter()
            .map(Slot::as_str)
            .collect::<Vec<_>>()
            .join(SLOT_DELIMITER)
    }

    /// Parses the roster store's slot column. Empty segments are ignored so
    /// that a row with no slots reads back as an empty set.
    pub fn split(column: &str) -> CourtResult<BTreeSet<Slot>> {
        column
            .split(SLOT_DELIMITER.trim())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(Slot::from_str)
            .collect()
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Slot {
    type Err = CourtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "before" => Ok(Slot::Before),
            "after" => Ok(Slot::After),
            other => Err(CourtError::Validation(format!("Unknown slot: {}", other))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: Uuid,
    pub name: String,
    pub slots: BTreeSet<Slot>,
    pub submitted_at: DateTime<Utc>,
}

impl Participant {
    pub fn is_available(&self, slot: Slot) -> bool {
        self.slots.contains(&slot)
    }

    pub fn to_row(&self) -> ParticipantRow {
        ParticipantRow {
            id: self.id,
            name: self.name.clone(),
            slots: Slot::join(&self.slots),
            submitted_at: self.submitted_at,
        }
    }
}

impl TryFrom<ParticipantRow> for Participant {
    type Error = CourtError;

    fn try_from(row: ParticipantRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            slots: Slot::split(&row.slots)?,
            name: row.name,
            submitted_at: row.submitted_at,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbsenceRecord {
    pub name: String,
    pub reason: String,
    pub submitted_at: DateTime<Utc>,
}

impl AbsenceRecord {
    pub fn to_row(&self) -> AbsenceRow {
        AbsenceRow {
            name: self.name.clone(),
            reason: self.reason.clone(),
            submitted_at: self.submitted_at,
        }
    }
}

impl From<AbsenceRow> for AbsenceRecord {
    fn from(row: AbsenceRow) -> Self {
        Self {
            name: row.name,
            reason: row.reason,
            submitted_at: row.submitted_at,
        }
    }
}

/// One roster store row. Slots are kept as a single delimited column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantRow {
    pub id: Uuid,
    pub name: String,
    pub slots: String,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbsenceRow {
    pub name: String,
    pub reason: String,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitResponseRequest {
    pub name: String,
    pub attending: bool,
    #[serde(default)]
    pub slots: Vec<Slot>,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitResponseResponse {
    /// Participant id, present only for sign-ups
    pub id: Option<Uuid>,
    pub name: String,
    pub attending: bool,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantsResponse {
    pub before: Vec<String>,
    pub after: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbsencesResponse {
    pub absences: Vec<AbsenceRecord>,
}
