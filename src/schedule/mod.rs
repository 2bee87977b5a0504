//! Schedule grid projection.
//!
//! This module turns a flat list of shift assignments and an employee
//! roster into dense week and month grids ready for rendering, computes
//! wrap-around shift hours, and converts upstream shift records into typed
//! assignments.

mod filter;
mod hours;
mod month;
mod records;
mod week;
mod window;

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::source::{EmployeeDirectory, ShiftSource};

pub use filter::RosterFilter;
pub use hours::compute_hours;
pub use month::{MonthCell, MonthGrid, project_month};
pub use records::{ParsedShifts, RejectedRecord, parse_shift_records, partition_shift_records};
pub use week::{DayCell, WeekGrid, WeekRow, project_week};
pub use window::{DAYS_PER_WEEK, column_of, month_dates, week_dates};

/// Default number of shifts shown per month cell.
pub const DEFAULT_OVERFLOW_CAP: usize = 3;

/// Layout options shared by the week and month views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridOptions {
    /// First column of every week.
    pub week_start: Weekday,
    /// Maximum shifts displayed per month cell.
    pub overflow_cap: usize,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            week_start: Weekday::Sun,
            overflow_cap: DEFAULT_OVERFLOW_CAP,
        }
    }
}

/// Projects grids straight from data sources.
///
/// Records are parsed strictly: one malformed record fails the whole
/// projection rather than rendering a partial roster.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScheduleGridProjector {
    options: GridOptions,
}

impl ScheduleGridProjector {
    /// Creates a projector with the given layout options.
    pub fn new(options: GridOptions) -> Self {
        Self { options }
    }

    /// Returns the layout options.
    pub fn options(&self) -> &GridOptions {
        &self.options
    }

    /// Loads the roster and shifts and projects the week containing `anchor_date`.
    pub fn week_from(
        &self,
        directory: &impl EmployeeDirectory,
        source: &impl ShiftSource,
        anchor_date: NaiveDate,
        filters: &RosterFilter,
    ) -> EngineResult<WeekGrid> {
        let employees = directory.employees()?;
        let shifts = parse_shift_records(&source.shift_records()?)?;
        project_week(
            &shifts,
            &employees,
            anchor_date,
            filters,
            &self.options,
        )
    }

    /// Loads the roster and shifts and projects the month containing `anchor_date`.
    pub fn month_from(
        &self,
        directory: &impl EmployeeDirectory,
        source: &impl ShiftSource,
        anchor_date: NaiveDate,
        filters: &RosterFilter,
    ) -> EngineResult<MonthGrid> {
        let employees = directory.employees()?;
        let shifts = parse_shift_records(&source.shift_records()?)?;
        Ok(project_month(
            &shifts,
            &employees,
            anchor_date,
            filters,
            &self.options,
        ))
    }
}
