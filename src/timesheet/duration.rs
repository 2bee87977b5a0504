//! Hours/minutes field editing and decimal-hours conversion.
//!
//! A time entry's duration is edited as two integer fields and stored as
//! decimal hours. The edit rules:
//!
//! - hours clamp to `[0, 23]` independently of minutes; minutes are reset
//!   to 0 only when the raw hours input is exactly 24
//! - minutes of 60 or more carry whole hours (`hours += m / 60`,
//!   `minutes = m % 60`) and the hours then clamp to 23
//! - a carry is remembered until the next edit; a later carrying input
//!   replaces it instead of stacking, so re-applying the same raw input
//!   never carries twice
//! - other minute inputs clamp to `[0, 59]`

use std::hash::{Hash, Hasher};

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

/// Largest value of the hours field.
pub const MAX_ENTRY_HOURS: u32 = 23;

/// Largest value of the minutes field.
pub const MAX_ENTRY_MINUTES: u32 = 59;

const MINUTES_PER_HOUR: i64 = 60;

/// A minutes input that carried whole hours into the hours field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinutesCarry {
    /// The raw minutes input as typed.
    pub raw_minutes: i64,
    /// The hours field before the carry was applied.
    pub base_hours: u32,
}

/// The editable hours/minutes view of a duration.
///
/// Equality and hashing compare the duration only; `carry` is edit state.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DurationFields {
    /// Whole hours (0–23).
    pub hours: u32,
    /// Minutes past the hour (0–59).
    pub minutes: u32,
    /// The carry produced by the last minutes edit, cleared by any other edit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carry: Option<MinutesCarry>,
}

impl PartialEq for DurationFields {
    fn eq(&self, other: &Self) -> bool {
        self.hours == other.hours && self.minutes == other.minutes
    }
}

impl Eq for DurationFields {}

impl Hash for DurationFields {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hours.hash(state);
        self.minutes.hash(state);
    }
}

impl DurationFields {
    /// Creates fields from already-normalized values.
    pub fn new(hours: u32, minutes: u32) -> Self {
        Self {
            hours,
            minutes,
            carry: None,
        }
    }

    /// Decomposes stored decimal hours for editing.
    ///
    /// Minutes are rounded to the nearest whole minute; a rounded value of
    /// 60 carries into hours. Negative input yields zero and values past
    /// 23:59 clamp to the field maxima.
    ///
    /// # Examples
    ///
    /// ```
    /// use roster_engine::timesheet::DurationFields;
    /// use rust_decimal::Decimal;
    ///
    /// assert_eq!(DurationFields::from_decimal_hours(Decimal::new(15, 1)), DurationFields::new(1, 30));
    /// assert_eq!(DurationFields::from_decimal_hours(Decimal::new(725, 2)), DurationFields::new(7, 15));
    /// ```
    pub fn from_decimal_hours(hours: Decimal) -> Self {
        if hours <= Decimal::ZERO {
            return Self::default();
        }
        let total_minutes = hours
            .checked_mul(Decimal::from(MINUTES_PER_HOUR))
            .and_then(|minutes| minutes.round().to_i64())
            .unwrap_or(i64::MAX);
        let whole_hours = total_minutes / MINUTES_PER_HOUR;
        if whole_hours > i64::from(MAX_ENTRY_HOURS) {
            return Self::new(MAX_ENTRY_HOURS, MAX_ENTRY_MINUTES);
        }
        Self::new(whole_hours as u32, (total_minutes % MINUTES_PER_HOUR) as u32)
    }
}

fn clamp_hours(raw: i64) -> u32 {
    raw.clamp(0, i64::from(MAX_ENTRY_HOURS)) as u32
}

/// Applies a raw edit to the hours field.
///
/// # Examples
///
/// ```
/// use roster_engine::timesheet::{DurationFields, apply_hours_delta};
///
/// let fields = DurationFields::new(5, 45);
/// assert_eq!(apply_hours_delta(fields, 8), DurationFields::new(8, 45));
/// assert_eq!(apply_hours_delta(fields, 30), DurationFields::new(23, 45));
/// assert_eq!(apply_hours_delta(fields, 24), DurationFields::new(23, 0));
/// assert_eq!(apply_hours_delta(fields, -2), DurationFields::new(0, 45));
/// ```
pub fn apply_hours_delta(fields: DurationFields, raw_hours: i64) -> DurationFields {
    let minutes = if raw_hours == 24 { 0 } else { fields.minutes };
    DurationFields::new(clamp_hours(raw_hours), minutes)
}

/// Applies a raw edit to the minutes field, carrying whole hours.
///
/// A carrying input is applied to the hours as they were before the
/// previous carry, if the last edit was one.
///
/// # Examples
///
/// ```
/// use roster_engine::timesheet::{DurationFields, apply_minutes_delta};
///
/// let carried = apply_minutes_delta(DurationFields::new(5, 0), 75);
/// assert_eq!(carried, DurationFields::new(6, 15));
///
/// // The same raw input again does not carry a second hour.
/// assert_eq!(apply_minutes_delta(carried, 75), DurationFields::new(6, 15));
///
/// // Neither does entering the displayed remainder.
/// assert_eq!(apply_minutes_delta(carried, 15), carried);
/// ```
pub fn apply_minutes_delta(fields: DurationFields, raw_minutes: i64) -> DurationFields {
    if raw_minutes < MINUTES_PER_HOUR {
        return DurationFields::new(
            fields.hours,
            raw_minutes.clamp(0, i64::from(MAX_ENTRY_MINUTES)) as u32,
        );
    }
    let base_hours = fields.carry.map_or(fields.hours, |carry| carry.base_hours);
    let hours = i64::from(base_hours).saturating_add(raw_minutes / MINUTES_PER_HOUR);
    DurationFields {
        hours: clamp_hours(hours),
        minutes: (raw_minutes % MINUTES_PER_HOUR) as u32,
        carry: Some(MinutesCarry {
            raw_minutes,
            base_hours,
        }),
    }
}

/// Converts the fields to canonical decimal hours: `hours + minutes / 60`.
///
/// Every duration stored on a [`crate::models::TimeEntry`] is produced by
/// this function.
///
/// # Examples
///
/// ```
/// use roster_engine::timesheet::{DurationFields, to_decimal_hours};
/// use rust_decimal::Decimal;
///
/// assert_eq!(to_decimal_hours(&DurationFields::new(1, 30)), Decimal::new(15, 1));
/// ```
pub fn to_decimal_hours(fields: &DurationFields) -> Decimal {
    Decimal::from(fields.hours) + Decimal::from(fields.minutes) / Decimal::from(MINUTES_PER_HOUR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    // ==========================================================================
    // Hours field
    // ==========================================================================
    #[test]
    fn test_hours_within_range_keep_minutes() {
        let fields = apply_hours_delta(DurationFields::new(2, 20), 7);
        assert_eq!(fields, DurationFields::new(7, 20));
    }

    #[test]
    fn test_hours_exactly_24_clamps_and_resets_minutes() {
        let fields = apply_hours_delta(DurationFields::new(2, 20), 24);
        assert_eq!(fields, DurationFields::new(23, 0));
    }

    #[test]
    fn test_hours_above_24_clamp_independently() {
        let fields = apply_hours_delta(DurationFields::new(2, 20), 99);
        assert_eq!(fields, DurationFields::new(23, 20));
    }

    #[test]
    fn test_negative_hours_clamp_to_zero() {
        let fields = apply_hours_delta(DurationFields::new(2, 20), -5);
        assert_eq!(fields, DurationFields::new(0, 20));
    }

    // ==========================================================================
    // Minutes field
    // ==========================================================================
    #[test]
    fn test_minutes_carry_into_hours() {
        let fields = apply_minutes_delta(DurationFields::new(5, 0), 75);
        assert_eq!(fields, DurationFields::new(6, 15));
    }

    #[test]
    fn test_minutes_carry_is_idempotent_for_displayed_value() {
        let carried = apply_minutes_delta(DurationFields::new(5, 0), 75);
        assert_eq!(apply_minutes_delta(carried, 15), carried);
    }

    #[test]
    fn test_same_raw_minutes_do_not_carry_twice() {
        let carried = apply_minutes_delta(DurationFields::new(5, 0), 75);
        let again = apply_minutes_delta(carried, 75);
        assert_eq!(again, DurationFields::new(6, 15));
        assert_eq!(apply_minutes_delta(again, 75), DurationFields::new(6, 15));
    }

    #[test]
    fn test_new_carry_replaces_previous_carry() {
        let carried = apply_minutes_delta(DurationFields::new(5, 0), 75);
        let fields = apply_minutes_delta(carried, 135);
        assert_eq!(fields, DurationFields::new(7, 15));
    }

    #[test]
    fn test_hours_edit_clears_carry() {
        let carried = apply_minutes_delta(DurationFields::new(5, 0), 75);
        let edited = apply_hours_delta(carried, 8);
        assert!(edited.carry.is_none());
        assert_eq!(apply_minutes_delta(edited, 75), DurationFields::new(9, 15));
    }

    #[test]
    fn test_remainder_edit_clears_carry() {
        let carried = apply_minutes_delta(DurationFields::new(5, 0), 75);
        let settled = apply_minutes_delta(carried, 15);
        assert!(settled.carry.is_none());
        assert_eq!(apply_minutes_delta(settled, 75), DurationFields::new(7, 15));
    }

    #[test]
    fn test_carry_is_not_serialized_when_absent() {
        let json = serde_json::to_value(DurationFields::new(1, 30)).unwrap();
        assert_eq!(json, serde_json::json!({"hours": 1, "minutes": 30}));

        let carried = apply_minutes_delta(DurationFields::new(5, 0), 75);
        let json = serde_json::to_value(carried).unwrap();
        assert_eq!(json["carry"]["raw_minutes"], 75);
        assert_eq!(json["carry"]["base_hours"], 5);
    }

    #[test]
    fn test_minutes_exactly_60_carry_one_hour() {
        let fields = apply_minutes_delta(DurationFields::new(1, 10), 60);
        assert_eq!(fields, DurationFields::new(2, 0));
    }

    #[test]
    fn test_large_minute_carry_clamps_hours() {
        let fields = apply_minutes_delta(DurationFields::new(22, 0), 185);
        assert_eq!(fields, DurationFields::new(23, 5));
    }

    #[test]
    fn test_negative_minutes_clamp_to_zero() {
        let fields = apply_minutes_delta(DurationFields::new(3, 30), -1);
        assert_eq!(fields, DurationFields::new(3, 0));
    }

    #[test]
    fn test_minutes_below_60_set_directly() {
        let fields = apply_minutes_delta(DurationFields::new(3, 30), 59);
        assert_eq!(fields, DurationFields::new(3, 59));
    }

    // ==========================================================================
    // Decimal conversion
    // ==========================================================================
    #[test]
    fn test_to_decimal_hours() {
        assert_eq!(to_decimal_hours(&DurationFields::new(0, 0)), Decimal::ZERO);
        assert_eq!(to_decimal_hours(&DurationFields::new(1, 30)), dec("1.5"));
        assert_eq!(to_decimal_hours(&DurationFields::new(7, 45)), dec("7.75"));
        assert_eq!(to_decimal_hours(&DurationFields::new(23, 0)), dec("23"));
    }

    #[test]
    fn test_decimal_round_trip_for_thirds() {
        let fields = DurationFields::new(2, 20);
        let hours = to_decimal_hours(&fields);
        assert_eq!(DurationFields::from_decimal_hours(hours), fields);
    }

    #[test]
    fn test_from_decimal_rounds_to_nearest_minute() {
        // 0.999 hours = 59.94 minutes
        assert_eq!(
            DurationFields::from_decimal_hours(dec("0.999")),
            DurationFields::new(1, 0)
        );
    }

    #[test]
    fn test_from_decimal_out_of_range() {
        assert_eq!(
            DurationFields::from_decimal_hours(dec("-1.5")),
            DurationFields::default()
        );
        assert_eq!(
            DurationFields::from_decimal_hours(dec("30")),
            DurationFields::new(23, 59)
        );
    }

    #[test]
    fn test_edit_order_does_not_matter_without_carry() {
        let start = DurationFields::default();
        let a = apply_hours_delta(apply_minutes_delta(start, 40), 9);
        let b = apply_minutes_delta(apply_hours_delta(start, 9), 40);
        assert_eq!(to_decimal_hours(&a), to_decimal_hours(&b));
    }
}
