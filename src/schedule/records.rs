//! Conversion of upstream shift records into typed assignments.
//!
//! Two policies are offered. [`parse_shift_records`] is strict and fails
//! the whole batch on the first malformed record, so a projection never
//! renders a partially corrupted roster. [`partition_shift_records`] is
//! lenient: malformed rows are excluded and each exclusion is reported.

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{ShiftAssignment, ShiftRecord, parse_clock, parse_date};

/// A record excluded by [`partition_shift_records`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedRecord {
    /// The id of the excluded record.
    pub record_id: String,
    /// The field that could not be parsed.
    pub field: String,
    /// The rendered parse error.
    pub message: String,
}

/// The outcome of lenient record parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedShifts {
    /// Records that parsed cleanly, in input order.
    pub shifts: Vec<ShiftAssignment>,
    /// Records that were excluded, in input order.
    pub rejected: Vec<RejectedRecord>,
}

fn malformed(record: &ShiftRecord, field: &str, value: &str, message: &str) -> EngineError {
    EngineError::MalformedInput {
        record_id: record.id.clone(),
        field: field.to_string(),
        value: value.to_string(),
        message: message.to_string(),
    }
}

fn parse_date_field(record: &ShiftRecord) -> EngineResult<NaiveDate> {
    parse_date(&record.date)
        .ok_or_else(|| malformed(record, "date", &record.date, "expected YYYY-MM-DD"))
}

fn parse_clock_field(record: &ShiftRecord, field: &str, value: &str) -> EngineResult<NaiveTime> {
    parse_clock(value).ok_or_else(|| malformed(record, field, value, "expected HH:MM"))
}

impl TryFrom<&ShiftRecord> for ShiftAssignment {
    type Error = EngineError;

    fn try_from(record: &ShiftRecord) -> EngineResult<Self> {
        let date = parse_date_field(record)?;
        let start_time = parse_clock_field(record, "start_time", &record.start_time)?;
        let end_time = parse_clock_field(record, "end_time", &record.end_time)?;

        let mut shift = ShiftAssignment::new(
            record.id.clone(),
            record.employee_id.clone(),
            date,
            record.shift_type,
            start_time,
            end_time,
            record.location.clone(),
        );
        shift.status = record.status;
        Ok(shift)
    }
}

/// Parses every record, failing on the first malformed one.
///
/// # Examples
///
/// ```
/// use roster_engine::error::EngineError;
/// use roster_engine::models::{ShiftRecord, ShiftStatus, ShiftType};
/// use roster_engine::schedule::parse_shift_records;
///
/// let record = ShiftRecord {
///     id: "shift_001".to_string(),
///     employee_id: "emp_001".to_string(),
///     date: "2026-01-15".to_string(),
///     shift_type: ShiftType::Night,
///     start_time: "22:00".to_string(),
///     end_time: "6pm".to_string(),
///     location: String::new(),
///     status: ShiftStatus::Scheduled,
/// };
///
/// match parse_shift_records(&[record]) {
///     Err(EngineError::MalformedInput { field, .. }) => assert_eq!(field, "end_time"),
///     other => panic!("unexpected {:?}", other),
/// }
/// ```
pub fn parse_shift_records(records: &[ShiftRecord]) -> EngineResult<Vec<ShiftAssignment>> {
    records.iter().map(ShiftAssignment::try_from).collect()
}

/// Parses every record, excluding and reporting malformed ones.
pub fn partition_shift_records(records: &[ShiftRecord]) -> ParsedShifts {
    let mut parsed = ParsedShifts::default();
    for record in records {
        match ShiftAssignment::try_from(record) {
            Ok(shift) => parsed.shifts.push(shift),
            Err(err) => {
                let field = match &err {
                    EngineError::MalformedInput { field, .. } => field.clone(),
                    _ => String::new(),
                };
                debug!(record_id = %record.id, error = %err, "Excluding malformed shift record");
                parsed.rejected.push(RejectedRecord {
                    record_id: record.id.clone(),
                    field,
                    message: err.to_string(),
                });
            }
        }
    }
    parsed
}
