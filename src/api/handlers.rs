//! HTTP request handlers for the roster engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{EngineResult, ValidationError};
use crate::models::TimeEntry;
use crate::schedule::{MonthGrid, WeekGrid, parse_shift_records, project_month, project_week};
use crate::timesheet::{DailyStats, aggregate_daily_stats, compute_overtime_amount, validate_draft};

use super::request::{
    DailyStatsRequest, MonthScheduleRequest, OvertimeRequest, ValidateEntryRequest,
    WeekScheduleRequest,
};
use super::response::{ApiError, ApiErrorResponse, OvertimeResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/schedule/week", post(week_schedule_handler))
        .route("/schedule/month", post(month_schedule_handler))
        .route("/timesheet/validate", post(validate_entry_handler))
        .route("/timesheet/daily-stats", post(daily_stats_handler))
        .route("/timesheet/overtime", post(overtime_handler))
        .with_state(state)
}

/// Unwraps a JSON body or builds the 400 response for it.
fn parse_body<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, Response> {
    match payload {
        Ok(Json(request)) => Ok(request),
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // The body text carries serde's detailed message
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            Err(ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error,
            }
            .into_response())
        }
    }
}

/// Turns an engine result into a JSON response, logging failures.
fn respond<T: Serialize>(correlation_id: Uuid, result: EngineResult<T>) -> Response {
    match result {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            Json(body),
        )
            .into_response(),
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Request failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /schedule/week.
async fn week_schedule_handler(
    State(state): State<AppState>,
    payload: Result<Json<WeekScheduleRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing week schedule request");

    let request = match parse_body(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let started = Instant::now();
    let result = build_week(&state, &request);
    if let Ok(grid) = &result {
        log_orphans(correlation_id, &grid.orphaned_shift_ids);
        info!(
            correlation_id = %correlation_id,
            anchor_date = %request.anchor_date,
            rows = grid.rows.len(),
            shifts = grid.total_shifts(),
            duration_us = started.elapsed().as_micros(),
            "Week projected"
        );
    }
    respond(correlation_id, result)
}

fn build_week(state: &AppState, request: &WeekScheduleRequest) -> EngineResult<WeekGrid> {
    let mut options = state.grid_options();
    if let Some(week_start) = request.week_start {
        options.week_start = week_start;
    }
    let shifts = parse_shift_records(&request.shifts)?;
    project_week(
        &shifts,
        &request.employees,
        request.anchor_date,
        &request.filters,
        &options,
    )
}

/// Handler for POST /schedule/month.
async fn month_schedule_handler(
    State(state): State<AppState>,
    payload: Result<Json<MonthScheduleRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing month schedule request");

    let request = match parse_body(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let started = Instant::now();
    let result = build_month(&state, &request);
    if let Ok(grid) = &result {
        log_orphans(correlation_id, &grid.orphaned_shift_ids);
        info!(
            correlation_id = %correlation_id,
            year = grid.year,
            month = grid.month,
            duration_us = started.elapsed().as_micros(),
            "Month projected"
        );
    }
    respond(correlation_id, result)
}

fn build_month(state: &AppState, request: &MonthScheduleRequest) -> EngineResult<MonthGrid> {
    let mut options = state.grid_options();
    if let Some(week_start) = request.week_start {
        options.week_start = week_start;
    }
    if let Some(cap) = request.overflow_cap {
        if cap == 0 {
            return Err(ValidationError::single("overflow_cap", "must be at least 1").into());
        }
        options.overflow_cap = cap;
    }
    let shifts = parse_shift_records(&request.shifts)?;
    Ok(project_month(
        &shifts,
        &request.employees,
        request.anchor_date,
        &request.filters,
        &options,
    ))
}

fn log_orphans(correlation_id: Uuid, orphaned: &[String]) {
    if !orphaned.is_empty() {
        warn!(
            correlation_id = %correlation_id,
            count = orphaned.len(),
            shift_ids = ?orphaned,
            "Shifts reference employees missing from the roster"
        );
    }
}

/// Handler for POST /timesheet/validate.
///
/// Returns the validated entry, submitted when the request asks for it.
async fn validate_entry_handler(
    payload: Result<Json<ValidateEntryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing time entry validation");

    let request = match parse_body(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    respond(correlation_id, validate_entry(&request))
}

fn validate_entry(request: &ValidateEntryRequest) -> EngineResult<TimeEntry> {
    let entry = validate_draft(&request.draft)?;
    if request.submit {
        return Ok(entry.submit()?);
    }
    Ok(entry)
}

/// Handler for POST /timesheet/daily-stats.
async fn daily_stats_handler(payload: Result<Json<DailyStatsRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing daily stats request");

    let request = match parse_body(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let result: EngineResult<DailyStats> =
        aggregate_daily_stats(&request.entries, request.date).map_err(Into::into);
    if let Ok(stats) = &result {
        info!(
            correlation_id = %correlation_id,
            date = %stats.date,
            entries = stats.entries_count,
            total_hours = %stats.total_hours,
            "Daily stats aggregated"
        );
    }
    respond(correlation_id, result)
}

/// Handler for POST /timesheet/overtime.
async fn overtime_handler(
    State(state): State<AppState>,
    payload: Result<Json<OvertimeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing overtime request");

    let request = match parse_body(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    respond(correlation_id, calculate_overtime(&state, &request))
}

fn calculate_overtime(state: &AppState, request: &OvertimeRequest) -> EngineResult<OvertimeResponse> {
    let mut error = ValidationError::new();
    if request.hours < Decimal::ZERO {
        error.push("hours", "must not be negative");
    }
    if request.hourly_rate < Decimal::ZERO {
        error.push("hourly_rate", "must not be negative");
    }
    let rate_multiplier = match (request.rate_multiplier, request.kind) {
        (Some(multiplier), _) => multiplier,
        (None, Some(kind)) => state.config().overtime_multiplier(kind),
        (None, None) => {
            error.push("rate_multiplier", "is required when kind is not given");
            Decimal::ZERO
        }
    };
    if rate_multiplier < Decimal::ZERO {
        error.push("rate_multiplier", "must not be negative");
    }
    let rate_multiplier = error.into_result(rate_multiplier)?;

    Ok(OvertimeResponse {
        rate_multiplier,
        amount: compute_overtime_amount(request.hours, request.hourly_rate, rate_multiplier)?,
    })
}
