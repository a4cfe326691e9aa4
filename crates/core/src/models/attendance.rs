use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    errors::{CourtError, CourtResult},
    models::{assignment::CourtId, participant::Slot},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TeamLabel {
    #[serde(rename = "TEAM_1")]
    Team1,
    #[serde(rename = "TEAM_2")]
    Team2,
}

impl TeamLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            TeamLabel::Team1 => "TEAM_1",
            TeamLabel::Team2 => "TEAM_2",
        }
    }
}

impl fmt::Display for TeamLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TeamLabel {
    type Err = CourtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "TEAM_1" | "TEAM1" | "1" => Ok(TeamLabel::Team1),
            "TEAM_2" | "TEAM2" | "2" => Ok(TeamLabel::Team2),
            other => Err(CourtError::Validation(format!("Unknown team: {}", other))),
        }
    }
}

/// A single check-in. At most one exists per name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceEvent {
    pub name: String,
    pub court: CourtId,
    pub team: TeamLabel,
    pub slot: Slot,
    pub checked_in_at: DateTime<Utc>,
}

impl AttendanceEvent {
    pub fn to_row(&self) -> AttendanceRow {
        AttendanceRow {
            name: self.name.clone(),
            court: self.court.to_string(),
            team: self.team.to_string(),
            slot: self.slot.to_string(),
            checked_in_at: self.checked_in_at,
        }
    }
}

impl TryFrom<AttendanceRow> for AttendanceEvent {
    type Error = CourtError;

    fn try_from(row: AttendanceRow) -> CourtResult<Self> {
        Ok(Self {
            court: row.court.parse()?,
            team: row.team.parse()?,
            slot: row.slot.parse()?,
            name: row.name,
            checked_in_at: row.checked_in_at,
        })
    }
}

/// One attendance store row; labels are kept in their text form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRow {
    pub name: String,
    pub court: String,
    pub team: String,
    pub slot: String,
    pub checked_in_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckInRequest {
    pub name: String,
    pub court: CourtId,
    pub team: TeamLabel,
    pub slot: Slot,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceResponse {
    pub attendance: Vec<AttendanceEvent>,
}
