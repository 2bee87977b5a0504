//! Week view projection.
//!
//! Produces one row per rostered employee with seven date-ordered cells,
//! each holding that employee's shifts for the day.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::EngineResult;
use crate::models::{Employee, ShiftAssignment};

use super::filter::RosterFilter;
use super::window::week_dates;
use super::GridOptions;

/// One (employee, date) cell of the week grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCell {
    /// The calendar date of the cell.
    pub date: NaiveDate,
    /// Shifts on this date, in input order.
    pub shifts: Vec<ShiftAssignment>,
}

/// One employee's week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekRow {
    /// The employee the row belongs to.
    pub employee: Employee,
    /// Exactly seven cells, in date order.
    pub cells: Vec<DayCell>,
}

impl WeekRow {
    /// Number of shifts across the row.
    pub fn shift_count(&self) -> usize {
        self.cells.iter().map(|c| c.shifts.len()).sum()
    }

    /// Rostered hours across the row.
    pub fn total_hours(&self) -> Decimal {
        self.cells
            .iter()
            .flat_map(|c| &c.shifts)
            .map(ShiftAssignment::hours)
            .sum()
    }
}

/// A dense employee × day grid for one week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekGrid {
    /// The seven dates of the week, in column order.
    pub dates: Vec<NaiveDate>,
    /// One row per filtered employee, in roster order.
    pub rows: Vec<WeekRow>,
    /// Ids of in-window shifts whose employee is not on the roster.
    pub orphaned_shift_ids: Vec<String>,
}

impl WeekGrid {
    /// Number of shifts across all rows.
    pub fn total_shifts(&self) -> usize {
        self.rows.iter().map(WeekRow::shift_count).sum()
    }
}

/// Returns the roster with repeated ids dropped (first occurrence wins).
pub(super) fn unique_roster(employees: &[Employee]) -> Vec<&Employee> {
    let mut seen = HashSet::new();
    employees
        .iter()
        .filter(|employee| {
            let first = seen.insert(employee.id.as_str());
            if !first {
                warn!(employee_id = %employee.id, "Duplicate employee id in roster, ignoring repeat");
            }
            first
        })
        .collect()
}

/// Returns ids of shifts inside `window` whose employee is not rostered.
pub(super) fn orphaned_shift_ids(
    shifts: &[ShiftAssignment],
    roster: &[&Employee],
    window: impl Fn(NaiveDate) -> bool,
) -> Vec<String> {
    let known: HashSet<&str> = roster.iter().map(|e| e.id.as_str()).collect();
    let mut reported = HashSet::new();
    shifts
        .iter()
        .filter(|s| window(s.date) && !known.contains(s.employee_id.as_str()))
        .filter(|s| reported.insert(s.id.as_str()))
        .map(|s| {
            debug!(shift_id = %s.id, employee_id = %s.employee_id, "Shift references unknown employee");
            s.id.clone()
        })
        .collect()
}

/// Projects shifts onto a week grid.
///
/// The roster is filtered first, so every admitted employee gets a row even
/// when it has no shifts. Each cell holds the employee's admitted shifts on
/// that exact date, in input order. Shifts whose employee is not on the
/// roster never appear in a row; their ids are listed in
/// [`WeekGrid::orphaned_shift_ids`].
///
/// Fails on `anchor_date` only when the week would leave the calendar range
/// chrono supports.
///
/// # Examples
///
/// ```
/// use roster_engine::models::{Employee, ShiftAssignment, ShiftType};
/// use roster_engine::schedule::{GridOptions, RosterFilter, project_week};
/// use chrono::{NaiveDate, NaiveTime};
///
/// let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(); // Thursday
/// let employees = vec![Employee {
///     id: "emp_001".to_string(),
///     name: "Maria Lopez".to_string(),
///     department: "Nursing".to_string(),
///     position: None,
/// }];
/// let shifts = vec![ShiftAssignment::new(
///     "shift_001",
///     "emp_001",
///     date,
///     ShiftType::Morning,
///     NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
///     "Ward A",
/// )];
///
/// let grid = project_week(&shifts, &employees, date, &RosterFilter::default(), &GridOptions::default())
///     .unwrap();
/// assert_eq!(grid.rows.len(), 1);
/// assert_eq!(grid.rows[0].cells.len(), 7);
/// assert_eq!(grid.rows[0].cells[4].shifts.len(), 1); // Sunday-start: Thursday is column 4
/// ```
pub fn project_week(
    shifts: &[ShiftAssignment],
    employees: &[Employee],
    anchor_date: NaiveDate,
    filters: &RosterFilter,
    options: &GridOptions,
) -> EngineResult<WeekGrid> {
    let dates = week_dates(anchor_date, options.week_start)?;
    let in_window = |date: NaiveDate| dates[0] <= date && date <= dates[6];
    let roster = unique_roster(employees);

    let mut by_cell: HashMap<(&str, NaiveDate), Vec<&ShiftAssignment>> = HashMap::new();
    for shift in shifts
        .iter()
        .filter(|s| in_window(s.date) && filters.admits_shift(s))
    {
        by_cell
            .entry((shift.employee_id.as_str(), shift.date))
            .or_default()
            .push(shift);
    }

    let rows = roster
        .iter()
        .filter(|employee| filters.admits_employee(employee))
        .map(|employee| WeekRow {
            employee: (*employee).clone(),
            cells: dates
                .iter()
                .map(|&date| DayCell {
                    date,
                    shifts: by_cell
                        .get(&(employee.id.as_str(), date))
                        .map(|cell| cell.iter().map(|s| (*s).clone()).collect())
                        .unwrap_or_default(),
                })
                .collect(),
        })
        .collect();

    Ok(WeekGrid {
        dates: dates.to_vec(),
        rows,
        orphaned_shift_ids: orphaned_shift_ids(shifts, &roster, in_window),
    })
}
