//! Calendar windows for the week and month views.
//!
//! Week start is always passed in explicitly; nothing here consults the
//! system locale or clock.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::error::{EngineResult, ValidationError};

/// Number of days in a grid row.
pub const DAYS_PER_WEEK: usize = 7;

/// Returns how many columns `date` sits after `week_start` (0..=6).
///
/// # Examples
///
/// ```
/// use roster_engine::schedule::column_of;
/// use chrono::{NaiveDate, Weekday};
///
/// let thursday = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
/// assert_eq!(column_of(thursday, Weekday::Sun), 4);
/// assert_eq!(column_of(thursday, Weekday::Mon), 3);
/// ```
pub fn column_of(date: NaiveDate, week_start: Weekday) -> u32 {
    let day = date.weekday().num_days_from_monday();
    let start = week_start.num_days_from_monday();
    (day + 7 - start) % 7
}

/// Returns the seven dates of the week containing `anchor`.
///
/// Fails on `anchor_date` when the week runs past the first or last date
/// chrono can represent.
pub fn week_dates(anchor: NaiveDate, week_start: Weekday) -> EngineResult<[NaiveDate; DAYS_PER_WEEK]> {
    let first = anchor.checked_sub_signed(Duration::days(i64::from(column_of(anchor, week_start))));
    let last = first.and_then(|first| first.checked_add_signed(Duration::days(6)));
    match (first, last) {
        (Some(first), Some(_)) => Ok(std::array::from_fn(|offset| {
            first + Duration::days(offset as i64)
        })),
        _ => Err(ValidationError::single(
            "anchor_date",
            format!("week of {anchor} is outside the supported calendar range"),
        )
        .into()),
    }
}

/// Returns every date of the month containing `anchor`, in order.
pub fn month_dates(anchor: NaiveDate) -> Vec<NaiveDate> {
    let first = anchor - Duration::days(i64::from(anchor.day0()));
    first
        .iter_days()
        .take_while(|date| date.month() == anchor.month())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_sunday_start_week() {
        // 2026-01-15 is a Thursday
        let dates = week_dates(make_date("2026-01-15"), Weekday::Sun).unwrap();
        assert_eq!(dates[0], make_date("2026-01-11"));
        assert_eq!(dates[6], make_date("2026-01-17"));
        assert_eq!(dates[0].weekday(), Weekday::Sun);
    }

    #[test]
    fn test_anchor_on_week_start() {
        let dates = week_dates(make_date("2026-01-11"), Weekday::Sun).unwrap();
        assert_eq!(dates[0], make_date("2026-01-11"));
    }

    #[test]
    fn test_anchor_on_last_day() {
        let dates = week_dates(make_date("2026-01-17"), Weekday::Sun).unwrap();
        assert_eq!(dates[0], make_date("2026-01-11"));
        assert_eq!(dates[6], make_date("2026-01-17"));
    }

    #[test]
    fn test_monday_start_week() {
        let dates = week_dates(make_date("2026-01-18"), Weekday::Mon).unwrap();
        assert_eq!(dates[0], make_date("2026-01-12"));
        assert_eq!(dates[6], make_date("2026-01-18"));
    }

    #[test]
    fn test_week_crosses_year_boundary() {
        // 2026-01-01 is a Thursday
        let dates = week_dates(make_date("2026-01-01"), Weekday::Sun).unwrap();
        assert_eq!(dates[0], make_date("2025-12-28"));
        assert_eq!(dates[6], make_date("2026-01-03"));
    }

    #[test]
    fn test_week_dates_are_consecutive() {
        let dates = week_dates(make_date("2026-03-04"), Weekday::Sun).unwrap();
        for pair in dates.windows(2) {
            assert_eq!(pair[1] - pair[0], Duration::days(1));
        }
    }

    #[test]
    fn test_week_past_calendar_end_is_rejected() {
        // The last representable date opens its own week.
        let error = week_dates(NaiveDate::MAX, NaiveDate::MAX.weekday()).unwrap_err();
        assert!(error.to_string().contains("anchor_date"));
    }

    #[test]
    fn test_week_before_calendar_start_is_rejected() {
        // The first representable date closes its week.
        let week_start = NaiveDate::MIN.weekday().succ();
        assert!(week_dates(NaiveDate::MIN, week_start).is_err());
    }

    #[test]
    fn test_week_ending_on_calendar_end_is_accepted() {
        let week_start = NaiveDate::MAX.weekday().succ();
        let dates = week_dates(NaiveDate::MAX, week_start).unwrap();
        assert_eq!(dates[6], NaiveDate::MAX);
    }

    #[test]
    fn test_month_dates_at_calendar_edges() {
        assert_eq!(month_dates(NaiveDate::MAX).last(), Some(&NaiveDate::MAX));
        assert_eq!(month_dates(NaiveDate::MIN).first(), Some(&NaiveDate::MIN));
    }

    #[test]
    fn test_month_dates() {
        let april = month_dates(make_date("2026-04-17"));
        assert_eq!(april.len(), 30);
        assert_eq!(april[0], make_date("2026-04-01"));
        assert_eq!(april[29], make_date("2026-04-30"));

        assert_eq!(month_dates(make_date("2028-02-10")).len(), 29);
        assert_eq!(month_dates(make_date("2026-02-28")).len(), 28);
        assert_eq!(month_dates(make_date("2026-12-31")).len(), 31);
    }

    #[test]
    fn test_column_of() {
        // 2026-04-01 is a Wednesday
        assert_eq!(column_of(make_date("2026-04-01"), Weekday::Sun), 3);
        assert_eq!(column_of(make_date("2026-04-01"), Weekday::Mon), 2);
        assert_eq!(column_of(make_date("2026-04-01"), Weekday::Wed), 0);
    }
}
