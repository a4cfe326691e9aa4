use std::{collections::BTreeMap, fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    errors::CourtError,
    models::{attendance::TeamLabel, participant::{Participant, Slot}},
};

/// 1-based court number, rendered as `court_N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CourtId(pub u32);

impl CourtId {
    /// Court label for the zero-based chunk index produced by the assignment engine.
    pub fn from_index(index: usize) -> Self {
        CourtId(index as u32 + 1)
    }

    pub fn number(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for CourtId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "court_{}", self.0)
    }
}

impl FromStr for CourtId {
    type Err = CourtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim().strip_prefix("court_").unwrap_or(s.trim());
        match digits.parse::<u32>() {
            Ok(n) if n > 0 => Ok(CourtId(n)),
            _ => Err(CourtError::Validation(format!("Invalid court: {}", s))),
        }
    }
}

impl Serialize for CourtId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CourtId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// The two pairs sharing one court.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourtTeams {
    #[serde(rename = "TEAM_1")]
    pub team_1: Vec<String>,
    #[serde(rename = "TEAM_2")]
    pub team_2: Vec<String>,
}

impl CourtTeams {
    pub fn team(&self, label: TeamLabel) -> &[String] {
        match label {
            TeamLabel::Team1 => &self.team_1,
            TeamLabel::Team2 => &self.team_2,
        }
    }

    pub fn members(&self) -> impl Iterator<Item = &String> {
        self.team_1.iter().chain(self.team_2.iter())
    }
}

/// Engine output for a single slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotAssignment {
    pub courts: BTreeMap<CourtId, CourtTeams>,
    pub waitlist: Vec<String>,
}

impl SlotAssignment {
    /// Number of players placed on a court.
    pub fn seated(&self) -> usize {
        self.courts.len() * 4
    }

    /// Court members in court order.
    pub fn members(&self) -> Vec<String> {
        self.courts
            .values()
            .flat_map(|teams| teams.members().cloned())
            .collect()
    }
}

/// Result of one admin-triggered assignment run. Each run replaces the
/// previous one wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub slots: BTreeMap<Slot, BTreeMap<CourtId, CourtTeams>>,
    /// Leftovers of every slot, `before` first, in roster order
    pub waitlist: Vec<Participant>,
    pub assigned_at: DateTime<Utc>,
}

impl Assignment {
    pub fn court(&self, slot: Slot, court: CourtId) -> Option<&CourtTeams> {
        self.slots.get(&slot).and_then(|courts| courts.get(&court))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentResponse {
    pub assignment: Option<Assignment>,
}
