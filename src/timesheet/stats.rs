//! Daily time entry aggregates.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineResult, ValidationError};
use crate::models::TimeEntry;
use crate::source::TimeEntrySource;

/// Totals for one day of time entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyStats {
    /// The day aggregated.
    pub date: NaiveDate,
    /// `billable_hours + non_billable_hours`.
    pub total_hours: Decimal,
    /// Hours on billable entries.
    pub billable_hours: Decimal,
    /// Hours on non-billable entries.
    pub non_billable_hours: Decimal,
    /// Number of entries on the day.
    pub entries_count: usize,
}

/// Longest span `aggregate_range_stats` accepts, in days.
pub const MAX_RANGE_DAYS: i64 = 366;

/// Sums one day's entries. `entries` pairs each entry with its position in
/// the caller's input so violations can point at it.
fn sum_day<'a>(
    for_date: NaiveDate,
    entries: impl IntoIterator<Item = (usize, &'a TimeEntry)>,
) -> Result<DailyStats, ValidationError> {
    let mut error = ValidationError::new();
    let mut billable_hours = Decimal::ZERO;
    let mut non_billable_hours = Decimal::ZERO;
    let mut entries_count = 0;

    for (index, entry) in entries {
        entries_count += 1;
        if entry.hours < Decimal::ZERO {
            error.push(
                format!("entries[{index}].hours"),
                format!("must not be negative (entry '{}')", entry.id),
            );
            continue;
        }
        let bucket = if entry.billable {
            &mut billable_hours
        } else {
            &mut non_billable_hours
        };
        match bucket.checked_add(entry.hours) {
            Some(sum) => *bucket = sum,
            None => error.push("hours", format!("total for {for_date} is out of range")),
        }
    }

    let total_hours = billable_hours.checked_add(non_billable_hours);
    if total_hours.is_none() {
        error.push("hours", format!("total for {for_date} is out of range"));
    }

    error.into_result(DailyStats {
        date: for_date,
        total_hours: total_hours.unwrap_or_default(),
        billable_hours,
        non_billable_hours,
        entries_count,
    })
}

/// Aggregates the entries logged on `for_date`.
///
/// `total_hours` is derived from the two partitions, so it always equals
/// `billable_hours + non_billable_hours` exactly. Every entry on the day
/// with negative hours is reported as `entries[i].hours`, where `i` is its
/// position in `entries`; a total that does not fit in a [`Decimal`] is
/// reported on `hours`.
///
/// # Examples
///
/// ```
/// use roster_engine::models::{EntryStatus, TimeEntry};
/// use roster_engine::timesheet::aggregate_daily_stats;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
/// let entry = |id: &str, hours: i64, billable: bool| TimeEntry {
///     id: id.to_string(),
///     project_id: "proj_001".to_string(),
///     task_id: "task_001".to_string(),
///     date,
///     hours: Decimal::new(hours, 1),
///     description: String::new(),
///     billable,
///     status: EntryStatus::Draft,
/// };
///
/// let stats = aggregate_daily_stats(&[entry("a", 15, true), entry("b", 25, false)], date).unwrap();
/// assert_eq!(stats.total_hours, Decimal::new(40, 1));
/// assert_eq!(stats.billable_hours, Decimal::new(15, 1));
/// assert_eq!(stats.entries_count, 2);
///
/// let error = aggregate_daily_stats(&[entry("c", -5, true)], date).unwrap_err();
/// assert_eq!(error.fields(), vec!["entries[0].hours"]);
/// ```
pub fn aggregate_daily_stats(
    entries: &[TimeEntry],
    for_date: NaiveDate,
) -> Result<DailyStats, ValidationError> {
    sum_day(
        for_date,
        entries.iter().enumerate().filter(|(_, e)| e.date == for_date),
    )
}

/// Aggregates every day from `from` to `to` inclusive.
///
/// Days without entries are included with zero totals. Returns an empty
/// list when `from` is after `to`. Entries are bucketed by date in one
/// pass; spans longer than [`MAX_RANGE_DAYS`] are rejected on `to`.
pub fn aggregate_range_stats(
    entries: &[TimeEntry],
    from: NaiveDate,
    to: NaiveDate,
) -> Result<Vec<DailyStats>, ValidationError> {
    if from > to {
        return Ok(Vec::new());
    }
    let span = (to - from).num_days() + 1;
    if span > MAX_RANGE_DAYS {
        return Err(ValidationError::single(
            "to",
            format!("range must not exceed {MAX_RANGE_DAYS} days"),
        ));
    }

    let mut by_date: HashMap<NaiveDate, Vec<(usize, &TimeEntry)>> = HashMap::new();
    for (index, entry) in entries.iter().enumerate() {
        if from <= entry.date && entry.date <= to {
            by_date.entry(entry.date).or_default().push((index, entry));
        }
    }

    let mut error = ValidationError::new();
    let mut days = Vec::with_capacity(span as usize);
    for date in from.iter_days().take(span as usize) {
        match sum_day(date, by_date.remove(&date).unwrap_or_default()) {
            Ok(stats) => days.push(stats),
            Err(day_error) => {
                for violation in day_error.violations {
                    error.push(violation.field, violation.message);
                }
            }
        }
    }
    error.into_result(days)
}

/// Reads entries from a source and aggregates `for_date`.
pub fn daily_stats_from(source: &impl TimeEntrySource, for_date: NaiveDate) -> EngineResult<DailyStats> {
    Ok(aggregate_daily_stats(&source.time_entries()?, for_date)?)
}
