//! Configuration types for the roster engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::{NaiveTime, Weekday};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

use crate::models::{ShiftType, hhmm};
use crate::schedule::{DEFAULT_OVERFLOW_CAP, GridOptions};
use crate::timesheet::OvertimeKind;

/// Default clock times for one shift type.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ShiftTemplate {
    /// Display label (e.g., "Morning").
    pub label: String,
    /// Default start time.
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    /// Default end time; earlier than `start_time` for overnight shifts.
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
}

/// Schedule configuration from schedule.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleConfig {
    /// First column of every week.
    pub week_start: Weekday,
    /// Maximum shifts displayed per month cell.
    pub overflow_cap: usize,
    /// Default clock times per shift type.
    #[serde(default)]
    pub shift_templates: HashMap<ShiftType, ShiftTemplate>,
}

impl ScheduleConfig {
    /// Returns the grid layout options.
    pub fn grid_options(&self) -> GridOptions {
        GridOptions {
            week_start: self.week_start,
            overflow_cap: self.overflow_cap,
        }
    }
}

/// Overtime rate multipliers by kind.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OvertimeMultipliers {
    /// Multiplier for weekday overtime.
    pub weekday: Decimal,
    /// Multiplier for weekend overtime.
    pub weekend: Decimal,
    /// Multiplier for public holiday overtime.
    pub public_holiday: Decimal,
}

impl OvertimeMultipliers {
    /// Returns the multiplier for a kind.
    pub fn get(&self, kind: OvertimeKind) -> Decimal {
        match kind {
            OvertimeKind::Weekday => self.weekday,
            OvertimeKind::Weekend => self.weekend,
            OvertimeKind::PublicHoliday => self.public_holiday,
        }
    }
}

/// Timesheet configuration from timesheet.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct TimesheetConfig {
    /// Overtime rate multipliers.
    pub overtime_multipliers: OvertimeMultipliers,
}

/// Complete engine configuration.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    schedule: ScheduleConfig,
    timesheet: TimesheetConfig,
}

impl EngineConfig {
    /// Creates a new engine configuration.
    pub fn new(schedule: ScheduleConfig, timesheet: TimesheetConfig) -> Self {
        Self {
            schedule,
            timesheet,
        }
    }

    /// Returns the schedule configuration.
    pub fn schedule(&self) -> &ScheduleConfig {
        &self.schedule
    }

    /// Returns the timesheet configuration.
    pub fn timesheet(&self) -> &TimesheetConfig {
        &self.timesheet
    }
}

fn template(label: &str, start: (u32, u32), end: (u32, u32)) -> ShiftTemplate {
    ShiftTemplate {
        label: label.to_string(),
        start_time: NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap_or_default(),
        end_time: NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap_or_default(),
    }
}

impl Default for EngineConfig {
    /// Mirrors the files shipped in `config/default`.
    fn default() -> Self {
        let shift_templates = HashMap::from([
            (ShiftType::Morning, template("Morning", (6, 0), (14, 0))),
            (ShiftType::Afternoon, template("Afternoon", (14, 0), (22, 0))),
            (ShiftType::Night, template("Night", (22, 0), (6, 0))),
            (ShiftType::Split, template("Split", (7, 0), (19, 0))),
            (ShiftType::Flexible, template("Flexible", (9, 0), (17, 0))),
        ]);

        Self::new(
            ScheduleConfig {
                week_start: Weekday::Sun,
                overflow_cap: DEFAULT_OVERFLOW_CAP,
                shift_templates,
            },
            TimesheetConfig {
                overtime_multipliers: OvertimeMultipliers {
                    weekday: Decimal::new(15, 1),
                    weekend: Decimal::new(20, 1),
                    public_holiday: Decimal::new(25, 1),
                },
            },
        )
    }
}
