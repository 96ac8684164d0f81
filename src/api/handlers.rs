//! HTTP request handlers for the CPF Contribution Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Query, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::{NaiveDate, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_contribution, resolve_rate, run_batch};
use crate::models::PayrollInput;

use super::request::{BulkCalculationRequest, CalculationRequest, RatesQuery};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/bulk-calculate", post(bulk_calculate_handler))
        .route("/rates", get(rates_handler))
        .with_state(state)
}

/// Converts a JSON extractor rejection into an API error body.
fn json_rejection_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
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
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

fn bad_request(error: ApiError) -> Response {
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

/// Handler for POST /calculate.
///
/// Accepts one employee's payroll details and returns the calculated
/// contribution breakdown.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(json_rejection_error(correlation_id, rejection)),
    };

    let as_of = request
        .as_of_date
        .unwrap_or_else(|| Utc::now().date_naive());
    let input: PayrollInput = request.into();

    let start_time = Instant::now();
    match calculate_contribution(&input, as_of, state.config()) {
        Ok(result) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                employee_id = %input.employee_id,
                total_contribution = %result.total_contribution,
                duration_us = duration.as_micros(),
                "Calculation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                employee_id = %input.employee_id,
                error = %err,
                "Calculation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Handler for POST /bulk-calculate.
///
/// Runs the contribution pipeline for a batch of employees and returns the
/// partial-success report; one employee's failure never fails the request.
async fn bulk_calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<BulkCalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing bulk calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(json_rejection_error(correlation_id, rejection)),
    };

    let employees: Vec<PayrollInput> = request.employees.into_iter().map(Into::into).collect();

    let start_time = Instant::now();
    match run_batch(request.payroll_period, &employees, state.config()) {
        Ok(report) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                processed = report.processed,
                succeeded = report.succeeded,
                failed = report.failed,
                duration_us = duration.as_micros(),
                "Bulk calculation completed"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(report),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Bulk calculation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Handler for GET /rates.
///
/// Returns the rate record effective for the given employee type, age band,
/// and optional as-of date.
async fn rates_handler(
    State(state): State<AppState>,
    Query(query): Query<RatesQuery>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    let as_of: NaiveDate = query.as_of_date.unwrap_or_else(|| Utc::now().date_naive());
    info!(
        correlation_id = %correlation_id,
        employee_type = %query.employee_type,
        age_band = %query.age_band,
        as_of = %as_of,
        "Processing rate lookup"
    );

    match resolve_rate(
        query.employee_type,
        query.age_band,
        as_of,
        state.config().rates(),
    ) {
        Ok(record) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            Json(record.clone()),
        )
            .into_response(),
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Rate lookup failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}
