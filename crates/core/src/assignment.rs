//! # Court Assignment
//!
//! Positional partitioning of one slot's roster into courts of four.
//!
//! Players are taken in sign-up order, four at a time. Each full group becomes
//! a court: the first two players form `TEAM_1`, the last two `TEAM_2`, and the
//! court is numbered by the group's position (first group plays on `court_1`).
//! Whatever is left after the last full group goes to the waitlist, still in
//! sign-up order.
//!
//! There is no shuffling or skill seeding. Callers wanting balanced courts
//! sort the roster before calling.

use std::collections::BTreeMap;

use crate::models::assignment::{CourtId, CourtTeams, SlotAssignment};

/// Players per court.
pub const COURT_SIZE: usize = 4;

/// Splits `players` into courts of four plus a waitlist.
///
/// Court members in court order followed by the waitlist always reproduce the
/// input exactly.
///
/// ```
/// use courtside_core::assign;
///
/// let result = assign(&["A", "B", "C", "D", "E"]);
/// assert_eq!(result.courts.len(), 1);
/// assert_eq!(result.waitlist, vec!["E".to_string()]);
/// ```
pub fn assign<S: AsRef<str>>(players: &[S]) -> SlotAssignment {
    let chunks = players.chunks_exact(COURT_SIZE);
    let waitlist = chunks
        .remainder()
        .iter()
        .map(|p| p.as_ref().to_string())
        .collect();

    let courts: BTreeMap<CourtId, CourtTeams> = chunks
        .enumerate()
        .map(|(index, group)| {
            let names: Vec<String> = group.iter().map(|p| p.as_ref().to_string()).collect();
            let teams = CourtTeams {
                team_1: names[..2].to_vec(),
                team_2: names[2..].to_vec(),
            };
            (CourtId::from_index(index), teams)
        })
        .collect();

    SlotAssignment { courts, waitlist }
}
