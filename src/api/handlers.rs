//! HTTP request handlers for the Bill Allocation Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    SplitOptions, allocation_summary, person_fair_totals, person_final_totals_with,
    person_pretax_item_totals,
};
use crate::models::{AllocationResult, PersonId, ReceiptData, people_from_line_items};

use super::request::AllocationRequest;
use super::response::ApiError;
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/allocate", post(allocate_handler))
        .with_state(state)
}

/// Handler for POST /allocate endpoint.
///
/// Accepts an allocation request and returns the per-person breakdown.
async fn allocate_handler(
    State(state): State<AppState>,
    payload: Result<Json<AllocationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing allocation request");

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
                    // Check if it's a missing field error
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

    // Convert request types to domain types
    let receipt: ReceiptData = request.receipt.into();

    // People default to the assignment-derived union
    let people: Vec<PersonId> = request
        .people
        .unwrap_or_else(|| people_from_line_items(&receipt.line_items));

    let result = perform_allocation(
        &receipt,
        &people,
        request.edit_mode,
        &state.config().split_options(),
    );

    info!(
        correlation_id = %correlation_id,
        allocation_id = %result.allocation_id,
        people_count = people.len(),
        line_items_count = receipt.line_items.len(),
        assigned_total = %result.summary.assigned_total,
        equal_split = result.summary.equal_split,
        duration_us = result.duration_us,
        "Allocation completed successfully"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(result),
    )
        .into_response()
}

/// Performs the allocation for a receipt and a list of people.
///
/// Unlike the request parsing above this can never fail: every degenerate
/// receipt shape resolves to zeros through the engine's guards.
fn perform_allocation(
    receipt: &ReceiptData,
    people: &[PersonId],
    edit_mode: bool,
    options: &SplitOptions,
) -> AllocationResult {
    let start_time = Instant::now();

    let pretax_totals = person_pretax_item_totals(receipt, people);
    let final_totals = person_final_totals_with(receipt, people, edit_mode, options);
    let summary = allocation_summary(receipt, edit_mode, &final_totals);

    // Fair rounding reconciles against the receipt total only when the
    // shares already cover it; otherwise the unassigned remainder would
    // be silently dumped onto whoever has the largest fractional share.
    let reconcile_against = if summary.is_fully_assigned {
        summary.receipt_total
    } else {
        summary.assigned_total
    };
    let fair_totals = person_fair_totals(reconcile_against, &final_totals);

    let duration_us = start_time.elapsed().as_micros() as u64;

    AllocationResult {
        allocation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        people: people.to_vec(),
        pretax_totals,
        final_totals,
        fair_totals,
        summary,
        duration_us,
    }
}
