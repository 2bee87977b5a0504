//! Shift duration arithmetic.

use chrono::NaiveTime;
use rust_decimal::Decimal;

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Calculates the hours between two wall-clock times on a common date.
///
/// If `end` is not after `start`, the shift is treated as crossing
/// midnight, so the result is `(end - start) mod 24h`. The result is never
/// negative and is zero only when `start == end`.
///
/// # Examples
///
/// ```
/// use roster_engine::models::parse_clock;
/// use roster_engine::schedule::compute_hours;
/// use rust_decimal::Decimal;
///
/// let hours = |start: &str, end: &str| {
///     compute_hours(parse_clock(start).unwrap(), parse_clock(end).unwrap())
/// };
///
/// assert_eq!(hours("09:00", "17:00"), Decimal::new(8, 0));
/// assert_eq!(hours("22:00", "06:00"), Decimal::new(8, 0)); // overnight
/// assert_eq!(hours("09:00", "09:00"), Decimal::ZERO);
/// ```
pub fn compute_hours(start: NaiveTime, end: NaiveTime) -> Decimal {
    let mut minutes = (end - start).num_minutes();
    if minutes < 0 {
        minutes += MINUTES_PER_DAY;
    }
    (Decimal::new(minutes, 0) / Decimal::new(60, 0)).normalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn time(s: &str) -> NaiveTime {
        NaiveTime::parse_from_str(s, "%H:%M").unwrap()
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_day_shift() {
        assert_eq!(compute_hours(time("09:00"), time("17:00")), dec("8.0"));
    }

    #[test]
    fn test_overnight_shift_wraps() {
        assert_eq!(compute_hours(time("22:00"), time("06:00")), dec("8.0"));
        assert_eq!(compute_hours(time("23:30"), time("00:15")), dec("0.75"));
    }

    #[test]
    fn test_equal_times_are_zero() {
        assert_eq!(compute_hours(time("09:00"), time("09:00")), Decimal::ZERO);
        assert_eq!(compute_hours(time("00:00"), time("00:00")), Decimal::ZERO);
    }

    #[test]
    fn test_partial_hours() {
        assert_eq!(compute_hours(time("09:00"), time("17:30")), dec("8.5"));
        assert_eq!(compute_hours(time("06:00"), time("06:45")), dec("0.75"));
    }

    #[test]
    fn test_near_full_day() {
        assert_eq!(compute_hours(time("06:00"), time("05:30")), dec("23.5"));
    }

    #[test]
    fn test_never_negative() {
        for start in ["00:00", "06:15", "12:00", "23:59"] {
            for end in ["00:00", "06:14", "12:01", "23:58"] {
                assert!(compute_hours(time(start), time(end)) >= Decimal::ZERO);
            }
        }
    }
}
