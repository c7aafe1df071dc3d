//! HTTP request handlers for the shift payroll API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    ShiftStatistics, aggregate, calculate_recorded_shift, calculate_shift, recalculate_shifts,
};
use crate::error::EngineError;
use crate::models::{Advance, PayoutDraft, Shift};

use super::request::{
    CalculateShiftRequest, PayoutDraftRequest, PeriodSummaryRequest, RecalculateRequest,
    ShiftQueryRequest,
};
use super::response::{ApiError, ApiErrorResponse, HealthResponse, ShiftQueryResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/rates", get(rates_handler))
        .route("/shifts/calculate", post(calculate_shift_handler))
        .route("/shifts/prepare", post(prepare_shift_handler))
        .route("/shifts/recalculate", post(recalculate_handler))
        .route("/shifts/query", post(query_shifts_handler))
        .route("/advances/prepare", post(prepare_advance_handler))
        .route("/periods/summary", post(period_summary_handler))
        .route("/payouts/draft", post(payout_draft_handler))
        .with_state(state)
}

/// Handler for GET /health endpoint.
async fn health_handler() -> Response {
    json_response(
        StatusCode::OK,
        &HealthResponse {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
    )
}

/// Handler for GET /rates endpoint.
///
/// Returns the default hourly rate and the preset rates offered for selection.
async fn rates_handler(State(state): State<AppState>) -> Response {
    json_response(StatusCode::OK, state.rates())
}

/// Handler for POST /shifts/calculate endpoint.
///
/// Calculates worked hours and earnings from raw shift times.
async fn calculate_shift_handler(
    payload: Result<Json<CalculateShiftRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing shift calculation request");

    let request = match parse_payload(payload, correlation_id) {
        Ok(request) => request,
        Err(error) => return error.into_response(),
    };

    let result = calculate_shift(
        request.start_time,
        request.end_time,
        request.break_minutes,
        request.hourly_rate,
    );

    info!(
        correlation_id = %correlation_id,
        work_hours = %result.work_hours,
        total_earned = %result.total_earned,
        "Shift calculation completed"
    );
    json_response(StatusCode::OK, &result)
}

/// Handler for POST /shifts/prepare endpoint.
///
/// Applies the default rate when none is given, validates the shift, and
/// fills its cached figures so it can be submitted to the backend.
async fn prepare_shift_handler(
    State(state): State<AppState>,
    payload: Result<Json<Shift>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing shift preparation request");

    let mut shift = match parse_payload(payload, correlation_id) {
        Ok(shift) => shift,
        Err(error) => return error.into_response(),
    };

    if shift.hourly_rate.is_none() {
        shift.hourly_rate = Some(state.rates().default_hourly_rate);
    }

    if let Err(err) = shift.validate(state.validation()) {
        return engine_error_response(correlation_id, err);
    }

    if let Some(calculation) = calculate_recorded_shift(&shift) {
        shift.work_hours = Some(calculation.work_hours);
        shift.total_earned = Some(calculation.total_earned);
    }

    info!(
        correlation_id = %correlation_id,
        shift_id = shift.id,
        "Shift prepared"
    );
    json_response(StatusCode::OK, &shift)
}

/// Handler for POST /shifts/recalculate endpoint.
async fn recalculate_handler(payload: Result<Json<RecalculateRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing recalculation request");

    let request = match parse_payload(payload, correlation_id) {
        Ok(request) => request,
        Err(error) => return error.into_response(),
    };

    let result = recalculate_shifts(&request.shifts);

    info!(
        correlation_id = %correlation_id,
        updated = result.shifts.len(),
        skipped = result.skipped_ids.len(),
        "Recalculation completed"
    );
    json_response(StatusCode::OK, &result)
}

/// Handler for POST /shifts/query endpoint.
///
/// Filters a shift listing and returns it newest first with its totals.
async fn query_shifts_handler(
    payload: Result<Json<ShiftQueryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing shift query request");

    let request = match parse_payload(payload, correlation_id) {
        Ok(request) => request,
        Err(error) => return error.into_response(),
    };

    let shifts = request.query.apply(&request.shifts);
    let statistics = ShiftStatistics::collect(&shifts);

    info!(
        correlation_id = %correlation_id,
        matched = statistics.record_count,
        total = request.shifts.len(),
        "Shift query completed"
    );
    json_response(StatusCode::OK, &ShiftQueryResponse { shifts, statistics })
}

/// Handler for POST /advances/prepare endpoint.
async fn prepare_advance_handler(payload: Result<Json<Advance>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing advance preparation request");

    let advance = match parse_payload(payload, correlation_id) {
        Ok(advance) => advance,
        Err(error) => return error.into_response(),
    };

    if let Err(err) = advance.validate() {
        return engine_error_response(correlation_id, err);
    }

    info!(
        correlation_id = %correlation_id,
        advance_id = advance.id,
        "Advance prepared"
    );
    json_response(StatusCode::OK, &advance)
}

/// Handler for POST /periods/summary endpoint.
///
/// Aggregates the employee's shifts and advances over the requested period.
async fn period_summary_handler(
    payload: Result<Json<PeriodSummaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing period summary request");

    let request = match parse_payload(payload, correlation_id) {
        Ok(request) => request,
        Err(error) => return error.into_response(),
    };

    if let Err(err) = request.period.validate() {
        return engine_error_response(correlation_id, err);
    }

    let start_time = Instant::now();
    let summary = aggregate(
        request.employee_id,
        &request.shifts,
        &request.advances,
        &request.period,
    );

    info!(
        correlation_id = %correlation_id,
        employee_id = summary.employee_id,
        shift_count = summary.shift_count,
        advance_count = summary.advance_count,
        net_amount = %summary.net_amount,
        warnings = summary.warnings.len(),
        duration_us = start_time.elapsed().as_micros(),
        "Period summary completed"
    );
    json_response(StatusCode::OK, &summary)
}

/// Handler for POST /payouts/draft endpoint.
///
/// Aggregates the period and turns the summary into a payout record. When
/// no period name is given it is derived from the employee and the month.
async fn payout_draft_handler(
    payload: Result<Json<PayoutDraftRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payout draft request");

    let request = match parse_payload(payload, correlation_id) {
        Ok(request) => request,
        Err(error) => return error.into_response(),
    };

    let period = request.summary.period;
    if let Err(err) = period.validate() {
        return engine_error_response(correlation_id, err);
    }

    let summary = aggregate(
        request.summary.employee_id,
        &request.summary.shifts,
        &request.summary.advances,
        &period,
    );

    let period_name = match (request.period_name, &request.employee) {
        (Some(name), _) => name,
        (None, Some(employee)) => period.default_name(employee),
        (None, None) => period.start_date.format("%B %Y").to_string(),
    };

    match PayoutDraft::from_summary(
        &summary,
        &period_name,
        request.notes.as_deref(),
        request.paid_at,
    ) {
        Ok(draft) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = draft.employee_id,
                period_name = %draft.period_name,
                net_amount = %draft.net_amount,
                "Payout draft created"
            );
            json_response(StatusCode::OK, &draft)
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Unwraps a JSON payload, mapping extractor rejections to API errors.
fn parse_payload<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, ApiErrorResponse> {
    let rejection = match payload {
        Ok(Json(value)) => return Ok(value),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
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

    Err(ApiErrorResponse::bad_request(error))
}

fn engine_error_response(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request rejected"
    );
    ApiErrorResponse::from(err).into_response()
}

fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}
