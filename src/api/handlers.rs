//! HTTP request handlers for the Tool Box engine API.
//!
//! This module contains the handler functions for all calculation endpoints.
//! Handlers only marshal: they build a fresh calculation session per request,
//! call into the calculation layer, and map engine rejections onto the error
//! response contract. No result is ever rendered for a rejected input.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    apply_preset, calculate_receipts_total, compute_session_end_date, compute_settlement,
};
use crate::error::EngineError;

use super::request::{DeadlineRequest, ReceiptsRequest, SettlementRequest};
use super::response::{
    ApiError, ApiErrorResponse, DeadlineResponse, ReceiptsResponse, SettlementResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/deadline", post(deadline_handler))
        .route("/settlement", post(settlement_handler))
        .route("/receipts", post(receipts_handler))
        .with_state(state)
}

/// Handler for the `POST /deadline` endpoint.
async fn deadline_handler(
    State(state): State<AppState>,
    payload: Result<Json<DeadlineRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };
    info!(
        correlation_id = %correlation_id,
        start_date = %request.start_date,
        "Processing deadline calculation"
    );

    let mut session = state.config().new_session();
    for holiday in &request.custom_holidays {
        session.calendar_mut().add_custom_holiday(*holiday);
    }
    for date in &request.excluded_dates {
        session.calendar_mut().exclude_date(*date);
    }
    if let Some(day_count) = request.day_count {
        session.set_day_count(day_count);
    }
    if let Some(rule) = request.rule {
        session.set_rule(rule);
    }

    // Preset selection overwrites manual entry, like the form does.
    let matter_applied = request
        .matter
        .as_deref()
        .and_then(|name| apply_preset(&mut session, name, state.config()))
        .map(|matter| matter.name.clone());

    match compute_session_end_date(&session, request.start_date) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                end_date = %result.end_date,
                counted = result.counted_dates.len(),
                "Deadline calculation complete"
            );
            let response = DeadlineResponse::from_result(
                correlation_id,
                result,
                session.rule(),
                matter_applied,
            );
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(error) => engine_error_response(correlation_id, &error),
    }
}

/// Handler for the `POST /settlement` endpoint.
async fn settlement_handler(
    State(_state): State<AppState>,
    payload: Result<Json<SettlementRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };
    info!(
        correlation_id = %correlation_id,
        cause = %request.cause,
        "Processing settlement calculation"
    );

    let case = request.into_case();
    match compute_settlement(&case) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                total = %result.total,
                "Settlement calculation complete"
            );
            let response = SettlementResponse::from_result(
                correlation_id,
                case.cause.article().to_string(),
                result,
            );
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(error) => engine_error_response(correlation_id, &error),
    }
}

/// Handler for the `POST /receipts` endpoint.
async fn receipts_handler(
    State(_state): State<AppState>,
    payload: Result<Json<ReceiptsRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match calculate_receipts_total(request.amount_per_receipt, request.count) {
        Ok(batch) => {
            info!(
                correlation_id = %correlation_id,
                total = %batch.total,
                "Receipts calculation complete"
            );
            let response = ReceiptsResponse {
                calculation_id: correlation_id,
                batch,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(error) => engine_error_response(correlation_id, &error),
    }
}

/// Maps a JSON extraction failure onto the error contract.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
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
        other => {
            let body_text = other.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON extraction rejected"
            );
            ApiError::malformed_json(body_text)
        }
    };

    (
        StatusCode::BAD_REQUEST,
        Json(ApiErrorResponse::from(error)),
    )
        .into_response()
}

/// Maps an engine rejection onto the error contract.
fn engine_error_response(correlation_id: Uuid, error: &EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %error,
        "Calculation rejected"
    );
    let (status, api_error) = ApiError::from_engine_error(error);
    (status, Json(ApiErrorResponse::from(api_error))).into_response()
}
