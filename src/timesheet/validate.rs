//! Time entry draft validation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;
use crate::models::{EntryStatus, TimeEntry};

use super::duration::{DurationFields, to_decimal_hours};

/// A time entry while it is being edited.
///
/// Required fields are optional here; [`validate_draft`] reports the
/// missing ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEntryDraft {
    /// Existing entry id when editing, `None` for a new entry.
    #[serde(default)]
    pub id: Option<String>,
    /// Selected project.
    #[serde(default)]
    pub project_id: Option<String>,
    /// Selected task.
    #[serde(default)]
    pub task_id: Option<String>,
    /// Date the work was done.
    pub date: NaiveDate,
    /// Hours and minutes as edited.
    #[serde(default)]
    pub duration: DurationFields,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Whether the time is billable.
    #[serde(default)]
    pub billable: bool,
}

impl TimeEntryDraft {
    /// Starts an empty draft for a date.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            id: None,
            project_id: None,
            task_id: None,
            date,
            duration: DurationFields::default(),
            description: String::new(),
            billable: false,
        }
    }

    /// Opens an existing entry for editing.
    pub fn from_entry(entry: &TimeEntry) -> Self {
        Self {
            id: Some(entry.id.clone()),
            project_id: Some(entry.project_id.clone()),
            task_id: Some(entry.task_id.clone()),
            date: entry.date,
            duration: DurationFields::from_decimal_hours(entry.hours),
            description: entry.description.clone(),
            billable: entry.billable,
        }
    }

    /// The edited duration in decimal hours.
    pub fn decimal_hours(&self) -> Decimal {
        to_decimal_hours(&self.duration)
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Validates a draft, reporting every violated field at once.
///
/// A draft without an id is given a fresh UUID. The resulting entry is
/// always in `Draft` status.
///
/// # Examples
///
/// ```
/// use roster_engine::timesheet::{TimeEntryDraft, validate_draft};
/// use chrono::NaiveDate;
///
/// let draft = TimeEntryDraft::new(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap());
/// let error = validate_draft(&draft).unwrap_err();
/// assert_eq!(error.fields(), vec!["project_id", "task_id", "hours"]);
/// ```
pub fn validate_draft(draft: &TimeEntryDraft) -> Result<TimeEntry, ValidationError> {
    let mut error = ValidationError::new();

    let project_id = present(&draft.project_id);
    if project_id.is_none() {
        error.push("project_id", "is required");
    }
    let task_id = present(&draft.task_id);
    if task_id.is_none() {
        error.push("task_id", "is required");
    }
    let hours = draft.decimal_hours();
    if hours <= Decimal::ZERO {
        error.push("hours", "must be greater than zero");
    }

    if !error.is_empty() {
        return Err(error);
    }

    Ok(TimeEntry {
        id: draft
            .id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string()),
        project_id: project_id.unwrap_or_default().to_string(),
        task_id: task_id.unwrap_or_default().to_string(),
        date: draft.date,
        hours,
        description: draft.description.clone(),
        billable: draft.billable,
        status: EntryStatus::Draft,
    })
}
