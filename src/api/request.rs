//! Request types for the roster engine API.
//!
//! Shift records arrive as raw strings and are parsed by the handlers, so a
//! bad date or clock time is reported against the record that carried it.

use chrono::{NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Employee, ShiftRecord, TimeEntry};
use crate::schedule::RosterFilter;
use crate::timesheet::{OvertimeKind, TimeEntryDraft};

/// Request body for the `/schedule/week` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekScheduleRequest {
    /// The roster, in display order.
    pub employees: Vec<Employee>,
    /// Shift records for any range of dates.
    pub shifts: Vec<ShiftRecord>,
    /// Any date inside the week to show.
    pub anchor_date: NaiveDate,
    /// Optional roster and shift filters.
    #[serde(default)]
    pub filters: RosterFilter,
    /// Overrides the configured first day of the week.
    #[serde(default)]
    pub week_start: Option<Weekday>,
}

/// Request body for the `/schedule/month` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthScheduleRequest {
    /// The roster, in display order.
    pub employees: Vec<Employee>,
    /// Shift records for any range of dates.
    pub shifts: Vec<ShiftRecord>,
    /// Any date inside the month to show.
    pub anchor_date: NaiveDate,
    /// Optional roster and shift filters.
    #[serde(default)]
    pub filters: RosterFilter,
    /// Overrides the configured first day of the week.
    #[serde(default)]
    pub week_start: Option<Weekday>,
    /// Overrides the configured number of shifts shown per day.
    #[serde(default)]
    pub overflow_cap: Option<usize>,
}

/// Request body for the `/timesheet/validate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateEntryRequest {
    /// The entry as edited.
    #[serde(flatten)]
    pub draft: TimeEntryDraft,
    /// Submit the entry once it validates.
    #[serde(default)]
    pub submit: bool,
}

/// Request body for the `/timesheet/daily-stats` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyStatsRequest {
    /// Logged entries for any range of dates.
    pub entries: Vec<TimeEntry>,
    /// The day to aggregate.
    pub date: NaiveDate,
}

/// Request body for the `/timesheet/overtime` endpoint.
///
/// The multiplier is either given directly or looked up from the
/// configured rate for `kind`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OvertimeRequest {
    /// Overtime hours worked.
    pub hours: Decimal,
    /// Base hourly rate.
    pub hourly_rate: Decimal,
    /// Explicit multiplier (e.g., 1.5).
    #[serde(default)]
    pub rate_multiplier: Option<Decimal>,
    /// Configured overtime category.
    #[serde(default)]
    pub kind: Option<OvertimeKind>,
}
