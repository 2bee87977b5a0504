//! Shift assignment model and related types.
//!
//! This module defines [`ShiftAssignment`], the typed form used by the grid
//! projector, and [`ShiftRecord`], the string-typed form delivered by
//! fixtures and upstream APIs.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::collection::Record;
use crate::config::ShiftTemplate;
use crate::schedule::compute_hours;

use super::clock::hhmm;

/// The kind of shift, used for labelling and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftType {
    /// Early shift, typically 06:00–14:00.
    Morning,
    /// Late shift, typically 14:00–22:00.
    Afternoon,
    /// Overnight shift, typically 22:00–06:00.
    Night,
    /// A shift worked in two blocks.
    Split,
    /// Hours agreed ad hoc.
    Flexible,
}

impl std::fmt::Display for ShiftType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShiftType::Morning => write!(f, "Morning"),
            ShiftType::Afternoon => write!(f, "Afternoon"),
            ShiftType::Night => write!(f, "Night"),
            ShiftType::Split => write!(f, "Split"),
            ShiftType::Flexible => write!(f, "Flexible"),
        }
    }
}

/// Informational status of a shift. The engine never branches on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftStatus {
    /// Planned but not yet worked.
    #[default]
    Scheduled,
    /// Worked.
    Completed,
    /// Called off.
    Cancelled,
}

/// One scheduled work block for one employee on one calendar date.
///
/// `end_time` may be earlier than `start_time` for overnight shifts; the
/// derived [`hours`](Self::hours) is then the wrap-around duration. Hours
/// are never stored: they are serialized from the clock times and any
/// `hours` value in incoming JSON is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ShiftAssignmentWire", into = "ShiftAssignmentWire")]
pub struct ShiftAssignment {
    /// Unique identifier for the shift.
    pub id: String,
    /// The employee working the shift.
    pub employee_id: String,
    /// The calendar date the shift is rostered on.
    pub date: NaiveDate,
    /// The kind of shift.
    pub shift_type: ShiftType,
    /// Wall-clock start time.
    pub start_time: NaiveTime,
    /// Wall-clock end time.
    pub end_time: NaiveTime,
    /// Where the shift is worked.
    pub location: String,
    /// Informational status.
    pub status: ShiftStatus,
}

/// JSON shape of a [`ShiftAssignment`]. `hours` is written on output and
/// skipped on input.
#[derive(Serialize, Deserialize)]
struct ShiftAssignmentWire {
    id: String,
    employee_id: String,
    date: NaiveDate,
    shift_type: ShiftType,
    #[serde(with = "hhmm")]
    start_time: NaiveTime,
    #[serde(with = "hhmm")]
    end_time: NaiveTime,
    #[serde(skip_deserializing)]
    hours: Decimal,
    #[serde(default)]
    location: String,
    #[serde(default)]
    status: ShiftStatus,
}

impl From<ShiftAssignmentWire> for ShiftAssignment {
    fn from(wire: ShiftAssignmentWire) -> Self {
        Self {
            id: wire.id,
            employee_id: wire.employee_id,
            date: wire.date,
            shift_type: wire.shift_type,
            start_time: wire.start_time,
            end_time: wire.end_time,
            location: wire.location,
            status: wire.status,
        }
    }
}

impl From<ShiftAssignment> for ShiftAssignmentWire {
    fn from(shift: ShiftAssignment) -> Self {
        Self {
            hours: shift.hours(),
            id: shift.id,
            employee_id: shift.employee_id,
            date: shift.date,
            shift_type: shift.shift_type,
            start_time: shift.start_time,
            end_time: shift.end_time,
            location: shift.location,
            status: shift.status,
        }
    }
}

impl ShiftAssignment {
    /// Creates a scheduled shift.
    ///
    /// # Examples
    ///
    /// ```
    /// use roster_engine::models::{ShiftAssignment, ShiftType};
    /// use chrono::{NaiveDate, NaiveTime};
    /// use rust_decimal::Decimal;
    ///
    /// let shift = ShiftAssignment::new(
    ///     "shift_001",
    ///     "emp_001",
    ///     NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
    ///     ShiftType::Night,
    ///     NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
    ///     NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
    ///     "Ward B",
    /// );
    /// assert_eq!(shift.hours(), Decimal::new(8, 0));
    /// ```
    pub fn new(
        id: impl Into<String>,
        employee_id: impl Into<String>,
        date: NaiveDate,
        shift_type: ShiftType,
        start_time: NaiveTime,
        end_time: NaiveTime,
        location: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            employee_id: employee_id.into(),
            date,
            shift_type,
            start_time,
            end_time,
            location: location.into(),
            status: ShiftStatus::Scheduled,
        }
    }

    /// Creates a scheduled shift using a configured template's clock times.
    pub fn from_template(
        id: impl Into<String>,
        employee_id: impl Into<String>,
        date: NaiveDate,
        shift_type: ShiftType,
        template: &ShiftTemplate,
        location: impl Into<String>,
    ) -> Self {
        Self::new(
            id,
            employee_id,
            date,
            shift_type,
            template.start_time,
            template.end_time,
            location,
        )
    }

    /// Worked hours, always derived from the current clock times.
    pub fn hours(&self) -> Decimal {
        compute_hours(self.start_time, self.end_time)
    }

    /// Returns true if the shift ends on the following calendar day.
    pub fn is_overnight(&self) -> bool {
        self.end_time < self.start_time
    }
}

impl Record for ShiftAssignment {
    const ENTITY: &'static str = "shift";

    fn id(&self) -> &str {
        &self.id
    }

    fn copied(&self, id: String, date: NaiveDate) -> Self {
        Self {
            id,
            date,
            status: ShiftStatus::Scheduled,
            ..self.clone()
        }
    }
}

/// A shift as delivered by upstream sources, before parsing.
///
/// Dates and times are raw strings; converting to a [`ShiftAssignment`]
/// is done by [`crate::schedule::parse_shift_records`] or
/// [`crate::schedule::partition_shift_records`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRecord {
    /// Unique identifier for the shift.
    pub id: String,
    /// The employee working the shift.
    pub employee_id: String,
    /// Calendar date as `YYYY-MM-DD`.
    pub date: String,
    /// The kind of shift.
    pub shift_type: ShiftType,
    /// Start time as `HH:MM`.
    pub start_time: String,
    /// End time as `HH:MM`.
    pub end_time: String,
    /// Where the shift is worked.
    #[serde(default)]
    pub location: String,
    /// Informational status.
    #[serde(default)]
    pub status: ShiftStatus,
}

impl From<&ShiftAssignment> for ShiftRecord {
    fn from(shift: &ShiftAssignment) -> Self {
        ShiftRecord {
            id: shift.id.clone(),
            employee_id: shift.employee_id.clone(),
            date: shift.date.to_string(),
            shift_type: shift.shift_type,
            start_time: shift.start_time.format(super::clock::CLOCK_FORMAT).to_string(),
            end_time: shift.end_time.format(super::clock::CLOCK_FORMAT).to_string(),
            location: shift.location.clone(),
            status: shift.status,
        }
    }
}
