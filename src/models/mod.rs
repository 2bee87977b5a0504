//! Core data models for the Roster Engine.
//!
//! This module contains the domain models shared by the schedule grid
//! projector and the timesheet validator.

mod clock;
mod employee;
mod shift;
mod time_entry;

pub use clock::{CLOCK_FORMAT, DATE_FORMAT, hhmm, parse_clock, parse_date};
pub use employee::Employee;
pub use shift::{ShiftAssignment, ShiftRecord, ShiftStatus, ShiftType};
pub use time_entry::{EntryStatus, TimeEntry};
