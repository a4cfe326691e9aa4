use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{assignment::CourtId, attendance::TeamLabel, participant::Slot};

/// Free-text score entered for a court. The text is never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub team_members: Vec<String>,
    pub score_text: String,
}

/// Key under which a court's score is kept, e.g. `court_2_after`.
pub fn score_key(slot: Slot, court: CourtId) -> String {
    format!("{}_{}", court, slot)
}

/// Key under which a team's partner pick is kept, e.g. `court_1_before_TEAM_2`.
pub fn partner_key(slot: Slot, court: CourtId, team: TeamLabel) -> String {
    format!("{}_{}_{}", court, slot, team)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordScoreRequest {
    pub score: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoresResponse {
    pub scores: BTreeMap<String, ScoreRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectPartnersRequest {
    pub members: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartnersResponse {
    pub partners: BTreeMap<String, Vec<String>>,
}
