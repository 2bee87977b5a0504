//! Time entry duration editing, validation and aggregation.
//!
//! - [`duration`]: the hours/minutes edit rules and decimal conversion
//! - [`overtime`]: overtime amounts with half-up currency rounding
//! - [`stats`]: daily billable/non-billable totals
//! - [`validate`]: draft validation listing every bad field

pub mod duration;
pub mod overtime;
pub mod stats;
pub mod validate;

pub use duration::{
    DurationFields, MAX_ENTRY_HOURS, MAX_ENTRY_MINUTES, MinutesCarry, apply_hours_delta,
    apply_minutes_delta, to_decimal_hours,
};
pub use overtime::{
    CURRENCY_DECIMAL_PLACES, OvertimeAmount, OvertimeKind, compute_overtime_amount,
    round_currency, total_overtime,
};
pub use stats::{DailyStats, aggregate_daily_stats, aggregate_range_stats, daily_stats_from};
pub use validate::{TimeEntryDraft, validate_draft};
