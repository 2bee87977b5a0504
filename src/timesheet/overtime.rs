//! Overtime amount calculation.
//!
//! Amounts keep their unrounded value alongside the display value so that
//! chained totals round once, at the end.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Decimal places used for currency display.
pub const CURRENCY_DECIMAL_PLACES: u32 = 2;

/// The named overtime rate categories configured in `timesheet.yaml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OvertimeKind {
    /// Overtime worked Monday to Friday.
    Weekday,
    /// Overtime worked on Saturday or Sunday.
    Weekend,
    /// Overtime worked on a public holiday.
    PublicHoliday,
}

/// An overtime amount in exact and display form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeAmount {
    /// `hours × rate × multiplier` with no rounding. Use this for further
    /// aggregation.
    pub exact: Decimal,
    /// `exact` rounded half-up to two decimal places for display.
    pub rounded: Decimal,
}

impl OvertimeAmount {
    fn from_exact(exact: Decimal) -> Self {
        Self {
            exact,
            rounded: round_currency(exact),
        }
    }
}

/// Rounds a monetary amount half-up (away from zero) to cents, always
/// carrying exactly two decimal places.
///
/// # Examples
///
/// ```
/// use roster_engine::timesheet::round_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_currency(Decimal::new(12345, 3)), Decimal::new(1235, 2)); // 12.345 -> 12.35
/// assert_eq!(round_currency(Decimal::new(12344, 3)), Decimal::new(1234, 2)); // 12.344 -> 12.34
/// ```
pub fn round_currency(amount: Decimal) -> Decimal {
    let mut rounded =
        amount.round_dp_with_strategy(CURRENCY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(CURRENCY_DECIMAL_PLACES);
    rounded
}

/// Calculates `hours × hourly_rate × rate_multiplier`.
///
/// Fails on `hours` and `hourly_rate` when the product does not fit in a
/// [`Decimal`].
///
/// # Examples
///
/// ```
/// use roster_engine::timesheet::compute_overtime_amount;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let amount = compute_overtime_amount(
///     Decimal::from_str("2.5").unwrap(),
///     Decimal::from_str("28.54").unwrap(),
///     Decimal::from_str("1.5").unwrap(),
/// )
/// .unwrap();
/// assert_eq!(amount.exact, Decimal::from_str("107.025").unwrap());
/// assert_eq!(amount.rounded, Decimal::from_str("107.03").unwrap());
/// ```
pub fn compute_overtime_amount(
    hours: Decimal,
    hourly_rate: Decimal,
    rate_multiplier: Decimal,
) -> Result<OvertimeAmount, ValidationError> {
    hours
        .checked_mul(hourly_rate)
        .and_then(|base| base.checked_mul(rate_multiplier))
        .map(OvertimeAmount::from_exact)
        .ok_or_else(|| {
            let mut error = ValidationError::new();
            error.push("hours", "overtime amount is out of range");
            error.push("hourly_rate", "overtime amount is out of range");
            error
        })
}

/// Sums amounts using their exact values, rounding once at the end.
pub fn total_overtime<'a>(
    amounts: impl IntoIterator<Item = &'a OvertimeAmount>,
) -> Result<OvertimeAmount, ValidationError> {
    amounts
        .into_iter()
        .try_fold(Decimal::ZERO, |total, amount| total.checked_add(amount.exact))
        .map(OvertimeAmount::from_exact)
        .ok_or_else(|| ValidationError::single("amounts", "overtime total is out of range"))
}
