//! Roster Engine for HR scheduling and timesheets
//!
//! This crate projects shift assignments and an employee roster into week
//! and month grids, and edits, validates and aggregates time entries.

#![warn(missing_docs)]

pub mod api;
pub mod collection;
pub mod config;
pub mod error;
pub mod models;
pub mod schedule;
pub mod source;
pub mod timesheet;
