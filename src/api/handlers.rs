//! HTTP request handlers for the payroll engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::aggregate_all;
use crate::models::{PunchSource, SkippedSource};

use super::request::PayrollRequest;
use super::response::{ApiError, ApiErrorResponse, PayrollResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/payroll", post(payroll_handler))
        .with_state(state)
}

/// Handler for POST /payroll endpoint.
///
/// Accepts a batch of punch sources and returns the aggregated payroll
/// summary. Sources whose timestamps fail to parse are reported as skipped;
/// the rest of the batch still runs.
async fn payroll_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
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
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let config = state.config();
    let hourly_rate = request
        .hourly_rate
        .unwrap_or(config.config().default_hourly_rate);

    if hourly_rate <= Decimal::ZERO {
        warn!(
            correlation_id = %correlation_id,
            hourly_rate = %hourly_rate,
            "Rejected non-positive hourly rate"
        );
        let api_error: ApiErrorResponse =
            crate::error::EngineError::InvalidHourlyRate { rate: hourly_rate }.into();
        return (
            api_error.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(api_error.error),
        )
            .into_response();
    }

    // Parse each source at the boundary; a source that fails to parse is
    // skipped with a message, never aborting the batch.
    let mut parsed_sources: Vec<PunchSource> = Vec::new();
    let mut skipped: Vec<SkippedSource> = Vec::new();
    for source in &request.sources {
        match source.parse() {
            Ok(parsed) => parsed_sources.push(parsed),
            Err(err) => {
                warn!(
                    correlation_id = %correlation_id,
                    source_id = %source.source_id,
                    error = %err,
                    "Skipping malformed source"
                );
                skipped.push(SkippedSource {
                    source_id: source.source_id.clone(),
                    message: err.to_string(),
                });
            }
        }
    }

    match aggregate_all(&parsed_sources, hourly_rate, config) {
        Ok(mut summary) => {
            // Parse failures surface alongside aggregation failures.
            summary.skipped.splice(0..0, skipped);
            info!(
                correlation_id = %correlation_id,
                sources = request.sources.len(),
                skipped = summary.skipped.len(),
                grand_total = %summary.grand_total,
                "Payroll run completed"
            );
            let response = PayrollResponse::new(summary, hourly_rate);
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(response),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Payroll run failed"
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
