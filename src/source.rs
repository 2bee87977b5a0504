//! Data source boundaries.
//!
//! The engine never owns rosters, shifts or time entries. It reads them
//! through these traits so callers can plug in an HTTP client, a cache or
//! static fixtures. [`FixtureSource`] is the in-memory implementation used
//! for fixtures and tests.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, ShiftRecord, TimeEntry};

/// Supplies the employee roster.
pub trait EmployeeDirectory {
    /// Returns every employee, in display order.
    fn employees(&self) -> EngineResult<Vec<Employee>>;
}

/// Supplies shift records.
pub trait ShiftSource {
    /// Returns every shift record, in insertion order.
    fn shift_records(&self) -> EngineResult<Vec<ShiftRecord>>;
}

/// Supplies logged time entries.
pub trait TimeEntrySource {
    /// Returns every time entry, in insertion order.
    fn time_entries(&self) -> EngineResult<Vec<TimeEntry>>;
}

/// An in-memory data set, optionally loaded from a JSON fixture file.
///
/// # Example
///
/// ```no_run
/// use roster_engine::source::{EmployeeDirectory, FixtureSource};
///
/// let fixtures = FixtureSource::load("./fixtures/roster.json")?;
/// println!("{} employees", fixtures.employees()?.len());
/// # Ok::<(), roster_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixtureSource {
    /// The roster.
    pub employees: Vec<Employee>,
    /// Shift records.
    pub shifts: Vec<ShiftRecord>,
    /// Time entries.
    pub time_entries: Vec<TimeEntry>,
}

impl FixtureSource {
    /// Loads a fixture set from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|e| EngineError::SourceUnavailable {
            origin: path_str.clone(),
            message: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| EngineError::SourceUnavailable {
            origin: path_str,
            message: e.to_string(),
        })
    }
}

impl EmployeeDirectory for FixtureSource {
    fn employees(&self) -> EngineResult<Vec<Employee>> {
        Ok(self.employees.clone())
    }
}

impl ShiftSource for FixtureSource {
    fn shift_records(&self) -> EngineResult<Vec<ShiftRecord>> {
        Ok(self.shifts.clone())
    }
}

impl TimeEntrySource for FixtureSource {
    fn time_entries(&self) -> EngineResult<Vec<TimeEntry>> {
        Ok(self.time_entries.clone())
    }
}
