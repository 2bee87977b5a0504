//! HTTP API module for the roster engine.
//!
//! This module exposes schedule grid projection and time entry
//! validation over JSON endpoints.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    DailyStatsRequest, MonthScheduleRequest, OvertimeRequest, ValidateEntryRequest,
    WeekScheduleRequest,
};
pub use response::{ApiError, ApiErrorResponse, OvertimeResponse};
pub use state::AppState;
