//! Month view projection.
//!
//! A calendar of seven columns. Leading `None` cells align day 1 under
//! its weekday; there is no trailing padding. Each day cell aggregates the
//! shifts of every admitted employee, truncated to a display cap.

use std::collections::{HashMap, HashSet};

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::models::{Employee, ShiftAssignment};

use super::filter::RosterFilter;
use super::week::{orphaned_shift_ids, unique_roster};
use super::window::{DAYS_PER_WEEK, column_of, month_dates};
use super::GridOptions;

/// One day of the month grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthCell {
    /// The calendar date of the cell.
    pub date: NaiveDate,
    /// Up to `overflow_cap` shifts, in input order.
    pub shifts: Vec<ShiftAssignment>,
    /// Number of admitted shifts not displayed ("+N more").
    pub overflow_count: usize,
    /// Number of admitted shifts on the date.
    pub total_count: usize,
}

/// A calendar grid for one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    /// Calendar year.
    pub year: i32,
    /// Calendar month (1–12).
    pub month: u32,
    /// Number of `None` cells before day 1.
    pub leading_blanks: usize,
    /// Leading blanks followed by one cell per day of the month.
    pub cells: Vec<Option<MonthCell>>,
    /// Ids of in-month shifts whose employee is not on the roster.
    pub orphaned_shift_ids: Vec<String>,
}

impl MonthGrid {
    /// Splits the cells into calendar rows of seven (the last may be short).
    pub fn weeks(&self) -> impl Iterator<Item = &[Option<MonthCell>]> {
        self.cells.chunks(DAYS_PER_WEEK)
    }

    /// Returns the cell for a date of this month.
    pub fn cell(&self, date: NaiveDate) -> Option<&MonthCell> {
        self.cells.iter().flatten().find(|cell| cell.date == date)
    }
}

/// Projects shifts onto a month calendar.
///
/// Cells count only shifts that pass `filters` and belong to an admitted
/// employee. `overflow_count` is the admitted count minus the displayed
/// count and is never negative.
///
/// # Examples
///
/// ```
/// use roster_engine::schedule::{GridOptions, RosterFilter, project_month};
/// use chrono::NaiveDate;
///
/// // April 2026 starts on a Wednesday.
/// let anchor = NaiveDate::from_ymd_opt(2026, 4, 20).unwrap();
/// let grid = project_month(&[], &[], anchor, &RosterFilter::default(), &GridOptions::default());
///
/// assert!(grid.cells[..3].iter().all(Option::is_none));
/// assert_eq!(grid.cells[3].as_ref().unwrap().date, NaiveDate::from_ymd_opt(2026, 4, 1).unwrap());
/// assert_eq!(grid.cells.len(), 3 + 30);
/// ```
pub fn project_month(
    shifts: &[ShiftAssignment],
    employees: &[Employee],
    anchor_date: NaiveDate,
    filters: &RosterFilter,
    options: &GridOptions,
) -> MonthGrid {
    let dates = month_dates(anchor_date);
    let in_month =
        |date: NaiveDate| date.year() == anchor_date.year() && date.month() == anchor_date.month();
    let roster = unique_roster(employees);
    let admitted: HashSet<&str> = roster
        .iter()
        .filter(|employee| filters.admits_employee(employee))
        .map(|employee| employee.id.as_str())
        .collect();

    let mut by_date: HashMap<NaiveDate, Vec<&ShiftAssignment>> = HashMap::new();
    for shift in shifts.iter().filter(|s| {
        in_month(s.date) && admitted.contains(s.employee_id.as_str()) && filters.admits_shift(s)
    }) {
        by_date.entry(shift.date).or_default().push(shift);
    }

    let leading_blanks = dates
        .first()
        .map_or(0, |first| column_of(*first, options.week_start) as usize);

    let mut cells: Vec<Option<MonthCell>> = Vec::with_capacity(leading_blanks + dates.len());
    cells.resize(leading_blanks, None);
    cells.extend(dates.iter().map(|&date| {
        let day = by_date.get(&date).map(Vec::as_slice).unwrap_or_default();
        let shown: Vec<ShiftAssignment> = day
            .iter()
            .take(options.overflow_cap)
            .map(|s| (*s).clone())
            .collect();
        Some(MonthCell {
            date,
            overflow_count: day.len().saturating_sub(shown.len()),
            total_count: day.len(),
            shifts: shown,
        })
    }));

    MonthGrid {
        year: anchor_date.year(),
        month: anchor_date.month(),
        leading_blanks,
        cells,
        orphaned_shift_ids: orphaned_shift_ids(shifts, &roster, in_month),
    }
}
