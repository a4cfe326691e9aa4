use chrono::Local;
use csv::WriterBuilder;
use serde::Serialize;

use crate::{
    errors::{CourtError, CourtResult},
    models::attendance::AttendanceEvent,
};

/// Byte-order mark prepended so spreadsheet tools detect UTF-8.
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Local wall-clock time, without a zone suffix.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const HEADER: [&str; 5] = ["name", "court", "team", "time_slot", "timestamp"];

#[derive(Serialize)]
struct AttendanceCsvRow<'a> {
    name: &'a str,
    court: String,
    team: &'static str,
    time_slot: &'static str,
    timestamp: String,
}

/// Renders check-ins as comma-separated text with a header row.
pub fn attendance_csv(events: &[AttendanceEvent]) -> CourtResult<Vec<u8>> {
    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .from_writer(UTF8_BOM.to_vec());

    wtr.write_record(HEADER).map_err(csv_error)?;
    for event in events {
        wtr.serialize(AttendanceCsvRow {
            name: &event.name,
            court: event.court.to_string(),
            team: event.team.as_str(),
            time_slot: event.slot.as_str(),
            timestamp: event
                .checked_in_at
                .with_timezone(&Local)
                .format(TIMESTAMP_FORMAT)
                .to_string(),
        })
        .map_err(csv_error)?;
    }

    wtr.into_inner()
        .map_err(|e| {
            let io = std::io::Error::new(e.error().kind(), e.error().to_string());
            CourtError::Internal(Box::new(io))
        })
}

fn csv_error(err: csv::Error) -> CourtError {
    CourtError::Internal(Box::new(err))
}
