//! # Session State
//!
//! [`Session`] owns the working copy of the roster, absentee list, check-ins,
//! current assignment, scores and partner picks.
//!
//! The three store-backed collections are seeded lazily: the first access
//! performs one full read of the matching store, and later accesses use the
//! working copy. Every mutation that has a store counterpart is written to the
//! store first and committed to the working copy only once the write succeeds,
//! so a failed write leaves the session exactly as it was.
//!
//! Check-ins are keyed by display name alone. Two people signing up under the
//! same name share one check-in.

use std::collections::{BTreeMap, BTreeSet};

use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::{
    admin::AdminGrant,
    assignment::assign,
    errors::{CourtError, CourtResult},
    export,
    models::{
        assignment::{Assignment, CourtId, CourtTeams},
        attendance::{AttendanceEvent, TeamLabel},
        participant::{AbsenceRecord, Participant, Slot},
        score::{ScoreRecord, partner_key, score_key},
    },
    store::Stores,
};

/// What a participant answered on the sign-up form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Availability {
    Attending { slots: BTreeSet<Slot> },
    Absent { reason: String },
}

/// The record created by a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Receipt {
    SignedUp(Participant),
    Absent(AbsenceRecord),
}

pub struct Session {
    stores: Stores,
    participants: Option<Vec<Participant>>,
    absences: Option<Vec<AbsenceRecord>>,
    attendance: Option<Vec<AttendanceEvent>>,
    assignment: Option<Assignment>,
    scores: BTreeMap<String, ScoreRecord>,
    partners: BTreeMap<String, Vec<String>>,
}

impl Session {
    pub fn new(stores: Stores) -> Self {
        Self {
            stores,
            participants: None,
            absences: None,
            attendance: None,
            assignment: None,
            scores: BTreeMap::new(),
            partners: BTreeMap::new(),
        }
    }

    async fn roster(&mut self) -> CourtResult<&mut Vec<Participant>> {
        if self.participants.is_none() {
            let rows = self.stores.roster.read_all_participants().await?;
            let participants = rows
                .into_iter()
                .map(Participant::try_from)
                .collect::<CourtResult<Vec<_>>>()?;
            info!(count = participants.len(), "Seeded roster from store");
            self.participants = Some(participants);
        }
        Ok(self.participants.get_or_insert_with(Vec::new))
    }

    async fn absence_list(&mut self) -> CourtResult<&mut Vec<AbsenceRecord>> {
        if self.absences.is_none() {
            let rows = self.stores.absences.read_all_absences().await?;
            let absences: Vec<AbsenceRecord> = rows.into_iter().map(AbsenceRecord::from).collect();
            info!(count = absences.len(), "Seeded absentee list from store");
            self.absences = Some(absences);
        }
        Ok(self.absences.get_or_insert_with(Vec::new))
    }

    async fn attendance_log(&mut self) -> CourtResult<&mut Vec<AttendanceEvent>> {
        if self.attendance.is_none() {
            let rows = self.stores.attendance.read_all_attendance().await?;
            let events = rows
                .into_iter()
                .map(AttendanceEvent::try_from)
                .collect::<CourtResult<Vec<_>>>()?;
            info!(count = events.len(), "Seeded attendance from store");
            self.attendance = Some(events);
        }
        Ok(self.attendance.get_or_insert_with(Vec::new))
    }

    /// Records a sign-up or an absence.
    ///
    /// The name is trimmed and must not be blank. Repeated submissions under
    /// the same name are all kept.
    pub async fn submit_attendance(
        &mut self,
        name: &str,
        availability: Availability,
    ) -> CourtResult<Receipt> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CourtError::EmptyName);
        }
        let submitted_at = Utc::now();

        match availability {
            Availability::Attending { slots } => {
                if slots.is_empty() {
                    warn!(player = name, "Sign-up without any slot");
                }
                let participant = Participant {
                    id: Uuid::new_v4(),
                    name: name.to_string(),
                    slots,
                    submitted_at,
                };

                // Seed before writing so the new row is not read back twice.
                self.roster().await?;
                self.stores
                    .roster
                    .append_participant(&participant.to_row())
                    .await?;
                self.roster().await?.push(participant.clone());

                info!(id = %participant.id, player = name, "Participant signed up");
                Ok(Receipt::SignedUp(participant))
            }
            Availability::Absent { reason } => {
                let absence = AbsenceRecord {
                    name: name.to_string(),
                    reason,
                    submitted_at,
                };

                self.absence_list().await?;
                self.stores.absences.append_absence(&absence.to_row()).await?;
                self.absence_list().await?.push(absence.clone());

                info!(player = name, "Absence recorded");
                Ok(Receipt::Absent(absence))
            }
        }
    }

    /// Checks a player in. Fails if anyone with this name already checked in,
    /// regardless of court or slot.
    ///
    /// Court, team and slot are recorded as given. They are not checked
    /// against the current assignment, so players can check in before courts
    /// are assigned or onto a court they switched to.
    pub async fn record_check_in(
        &mut self,
        name: &str,
        court: CourtId,
        team: TeamLabel,
        slot: Slot,
    ) -> CourtResult<AttendanceEvent> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CourtError::EmptyName);
        }
        if self.is_checked_in(name).await? {
            debug!(player = name, "Duplicate check-in rejected");
            return Err(CourtError::AlreadyCheckedIn(name.to_string()));
        }

        let event = AttendanceEvent {
            name: name.to_string(),
            court,
            team,
            slot,
            checked_in_at: Utc::now(),
        };
        self.stores
            .attendance
            .append_attendance(&event.to_row())
            .await?;
        self.attendance_log().await?.push(event.clone());

        info!(player = name, %court, %team, %slot, "Checked in");
        Ok(event)
    }

    pub async fn is_checked_in(&mut self, name: &str) -> CourtResult<bool> {
        Ok(self.attendance_log().await?.iter().any(|e| e.name == name))
    }

    /// Stores a score, replacing whatever was kept under `identifier`.
    pub fn record_score(
        &mut self,
        identifier: impl Into<String>,
        team_members: Vec<String>,
        score_text: impl Into<String>,
    ) {
        let identifier = identifier.into();
        debug!(%identifier, "Score recorded");
        self.scores.insert(
            identifier,
            ScoreRecord {
                team_members,
                score_text: score_text.into(),
            },
        );
    }

    /// Records a score against a court of the current assignment and returns
    /// the key it was stored under.
    pub fn record_court_score(
        &mut self,
        slot: Slot,
        court: CourtId,
        score_text: impl Into<String>,
    ) -> CourtResult<String> {
        let members: Vec<String> = self
            .court_of(slot, court)?
            .members()
            .cloned()
            .collect();
        let key = score_key(slot, court);
        self.record_score(key.clone(), members, score_text);
        Ok(key)
    }

    pub fn scores(&self) -> &BTreeMap<String, ScoreRecord> {
        &self.scores
    }

    /// Records which members of a team picked each other as partners. Every
    /// name must belong to that team.
    pub fn select_partners(
        &mut self,
        slot: Slot,
        court: CourtId,
        team: TeamLabel,
        names: Vec<String>,
    ) -> CourtResult<()> {
        let roster = self.court_of(slot, court)?.team(team);
        if let Some(stranger) = names.iter().find(|n| !roster.contains(*n)) {
            return Err(CourtError::Validation(format!(
                "{} is not on {} of {}",
                stranger, team, court
            )));
        }

        self.partners.insert(partner_key(slot, court, team), names);
        Ok(())
    }

    pub fn partners(&self) -> &BTreeMap<String, Vec<String>> {
        &self.partners
    }

    fn court_of(
        &self,
        slot: Slot,
        court: CourtId,
    ) -> CourtResult<&CourtTeams> {
        self.assignment
            .as_ref()
            .and_then(|a| a.court(slot, court))
            .ok_or_else(|| CourtError::NotFound(format!("No {} in the {} slot", court, slot)))
    }

    pub async fn participants(&mut self) -> CourtResult<&[Participant]> {
        Ok(self.roster().await?.as_slice())
    }

    /// Names of everyone available for `slot`, in sign-up order.
    pub async fn names_for(&mut self, slot: Slot) -> CourtResult<Vec<String>> {
        Ok(self
            .roster()
            .await?
            .iter()
            .filter(|p| p.is_available(slot))
            .map(|p| p.name.clone())
            .collect())
    }

    pub async fn attendance(&mut self) -> CourtResult<&[AttendanceEvent]> {
        Ok(self.attendance_log().await?.as_slice())
    }

    pub fn assignment(&self) -> Option<&Assignment> {
        self.assignment.as_ref()
    }

    /// Recomputes courts for every slot from the current roster and replaces
    /// the previous assignment.
    pub async fn assign_teams(&mut self, _grant: &AdminGrant) -> CourtResult<&Assignment> {
        let roster = self.roster().await?;

        let mut slots = BTreeMap::new();
        let mut waitlist = Vec::new();
        for slot in Slot::ALL {
            let available: Vec<&Participant> =
                roster.iter().filter(|p| p.is_available(slot)).collect();
            let names: Vec<&str> = available.iter().map(|p| p.name.as_str()).collect();
            let result = assign(&names);

            waitlist.extend(available[result.seated()..].iter().map(|p| (*p).clone()));
            info!(
                %slot,
                courts = result.courts.len(),
                waitlisted = result.waitlist.len(),
                "Assigned courts"
            );
            slots.insert(slot, result.courts);
        }

        let assignment = Assignment {
            slots,
            waitlist,
            assigned_at: Utc::now(),
        };
        Ok(self.assignment.insert(assignment))
    }

    pub async fn absences(&mut self, _grant: &AdminGrant) -> CourtResult<&[AbsenceRecord]> {
        Ok(self.absence_list().await?.as_slice())
    }

    /// Attendance as CSV with a UTF-8 byte-order mark.
    pub async fn export_attendance_csv(&mut self, _grant: &AdminGrant) -> CourtResult<Vec<u8>> {
        export::attendance_csv(self.attendance_log().await?)
    }

    /// Empties every collection of the working copy. The stores keep their rows.
    pub fn reset_all(&mut self, _grant: &AdminGrant) {
        self.participants = Some(Vec::new());
        self.absences = Some(Vec::new());
        self.attendance = Some(Vec::new());
        self.assignment = None;
        self.scores.clear();
        self.partners.clear();
        info!("Working state reset");
    }

    /// Drops the store-backed collections so the next access reads the stores again.
    pub fn reload(&mut self, _grant: &AdminGrant) {
        self.participants = None;
        self.absences = None;
        self.attendance = None;
        info!("Working state marked for reload");
    }
}
