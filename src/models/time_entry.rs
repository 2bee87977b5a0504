//! Time entry model.
//!
//! A [`TimeEntry`] is a validated, logged work duration against a project
//! task. Entries in progress are edited as
//! [`crate::timesheet::TimeEntryDraft`] and only become `TimeEntry` values
//! through [`crate::timesheet::validate_draft`].

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::collection::Record;
use crate::error::ValidationError;

/// Submission status of a time entry. The only transition is
/// `Draft` to `Submitted`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryStatus {
    /// Editable, not yet sent for approval.
    #[default]
    Draft,
    /// Sent for approval.
    Submitted,
}

/// One logged work duration against a project task on a date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEntry {
    /// Unique identifier for the entry.
    pub id: String,
    /// The project the time was spent on.
    pub project_id: String,
    /// The task within the project.
    pub task_id: String,
    /// The date the work was done.
    pub date: NaiveDate,
    /// Duration in canonical decimal hours (1h30m is 1.5).
    pub hours: Decimal,
    /// Free-text description of the work.
    #[serde(default)]
    pub description: String,
    /// Whether the time can be invoiced.
    #[serde(default)]
    pub billable: bool,
    /// Submission status.
    #[serde(default)]
    pub status: EntryStatus,
}

impl TimeEntry {
    /// Returns a submitted copy of this entry.
    ///
    /// Fails on `status` if the entry was already submitted and on `hours`
    /// if the duration is not positive.
    pub fn submit(&self) -> Result<TimeEntry, ValidationError> {
        let mut error = ValidationError::new();
        if self.status == EntryStatus::Submitted {
            error.push("status", "has already been submitted");
        }
        if self.hours <= Decimal::ZERO {
            error.push("hours", "must be greater than zero");
        }
        error.into_result(TimeEntry {
            status: EntryStatus::Submitted,
            ..self.clone()
        })
    }
}

impl Record for TimeEntry {
    const ENTITY: &'static str = "time entry";

    fn id(&self) -> &str {
        &self.id
    }

    fn copied(&self, id: String, date: NaiveDate) -> Self {
        Self {
            id,
            date,
            status: EntryStatus::Draft,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_entry(hours: &str, status: EntryStatus) -> TimeEntry {
        TimeEntry {
            id: "te_001".to_string(),
            project_id: "proj_payroll".to_string(),
            task_id: "task_review".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            hours: dec(hours),
            description: "Pay run review".to_string(),
            billable: true,
            status,
        }
    }

    #[test]
    fn test_submit_draft() {
        let submitted = create_entry("1.5", EntryStatus::Draft).submit().unwrap();
        assert_eq!(submitted.status, EntryStatus::Submitted);
        assert_eq!(submitted.hours, dec("1.5"));
    }

    #[test]
    fn test_submit_is_one_way() {
        let error = create_entry("1.5", EntryStatus::Submitted)
            .submit()
            .unwrap_err();
        assert_eq!(error.fields(), vec!["status"]);
    }

    #[test]
    fn test_submit_reports_every_violation() {
        let error = create_entry("0", EntryStatus::Submitted)
            .submit()
            .unwrap_err();
        assert_eq!(error.fields(), vec!["status", "hours"]);
    }

    #[test]
    fn test_copied_resets_to_draft() {
        let entry = create_entry("2.25", EntryStatus::Submitted);
        let copy = entry.copied(
            "te_002".to_string(),
            NaiveDate::from_ymd_opt(2026, 1, 16).unwrap(),
        );

        assert_eq!(copy.status, EntryStatus::Draft);
        assert_eq!(copy.hours, entry.hours);
        assert_eq!(copy.project_id, entry.project_id);
    }

    #[test]
    fn test_deserialize_entry_with_string_hours() {
        let json = r#"{
            "id": "te_001",
            "project_id": "proj_payroll",
            "task_id": "task_review",
            "date": "2026-01-15",
            "hours": "1.5"
        }"#;

        let entry: TimeEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.hours, dec("1.5"));
        assert_eq!(entry.status, EntryStatus::Draft);
        assert!(!entry.billable);
    }

    #[test]
    fn test_entry_status_serialization() {
        assert_eq!(
            serde_json::to_string(&EntryStatus::Submitted).unwrap(),
            "\"submitted\""
        );
    }
}
