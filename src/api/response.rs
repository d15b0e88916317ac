//! Response types for the Tool Box engine API.
//!
//! This module defines the success payloads of the calculation endpoints and
//! the error response structure shared by all of them. Rounded display
//! values are derived here, at the presentation edge; the engine itself only
//! ever hands back full-precision figures.

use axum::http::StatusCode;
use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{DayCountRule, DeadlineResult, ReceiptsResult, SettlementResult};

/// Success payload of `POST /deadline`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeadlineResponse {
    /// Correlation ID of this calculation.
    pub calculation_id: Uuid,
    /// The date on which the deadline expires.
    pub end_date: NaiveDate,
    /// Every counted date, chronological.
    pub counted_dates: Vec<NaiveDate>,
    /// The day count the calculation ran with (after preset application).
    pub day_count: u32,
    /// The rule the calculation ran with (after preset application).
    pub rule: DayCountRule,
    /// The preset that was applied, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matter_applied: Option<String>,
}

impl DeadlineResponse {
    /// Builds the response from an engine result.
    pub fn from_result(
        calculation_id: Uuid,
        result: DeadlineResult,
        rule: DayCountRule,
        matter_applied: Option<String>,
    ) -> Self {
        DeadlineResponse {
            calculation_id,
            end_date: result.end_date,
            day_count: result.counted_dates.len() as u32,
            counted_dates: result.counted_dates,
            rule,
            matter_applied,
        }
    }
}

/// Success payload of `POST /settlement`.
///
/// Carries the full-precision breakdown plus `total_rounded`, the
/// zero-decimal figure the UI displays as currency.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettlementResponse {
    /// Correlation ID of this calculation.
    pub calculation_id: Uuid,
    /// The statutory label of the termination cause.
    pub cause: String,
    /// The full-precision settlement breakdown.
    #[serde(flatten)]
    pub breakdown: SettlementResult,
    /// The total rounded to whole pesos for display.
    pub total_rounded: Decimal,
}

impl SettlementResponse {
    /// Builds the response from an engine result.
    pub fn from_result(calculation_id: Uuid, cause: String, breakdown: SettlementResult) -> Self {
        let total_rounded = breakdown
            .total
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        SettlementResponse {
            calculation_id,
            cause,
            breakdown,
            total_rounded,
        }
    }
}

/// Success payload of `POST /receipts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceiptsResponse {
    /// Correlation ID of this calculation.
    pub calculation_id: Uuid,
    /// The computed batch.
    #[serde(flatten)]
    pub batch: ReceiptsResult,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Maps an engine error to its status code and response body.
    ///
    /// Engine rejections are client errors: the request was well-formed JSON
    /// but the calculation refused it. Configuration errors can only come
    /// from a broken deployment.
    pub fn from_engine_error(error: &EngineError) -> (StatusCode, Self) {
        match error {
            EngineError::InvalidInput { .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Self::validation_error(error.to_string()),
            ),
            EngineError::NoComputationRequested => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Self::new("NO_COMPUTATION_REQUESTED", error.to_string()),
            ),
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Self::new("CONFIG_ERROR", error.to_string()),
            ),
        }
    }
}

/// Wrapper serializing errors as `{"error": {...}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// The error payload.
    pub error: ApiError,
}

impl From<ApiError> for ApiErrorResponse {
    fn from(error: ApiError) -> Self {
        ApiErrorResponse { error }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_maps_to_unprocessable_entity() {
        let error = EngineError::invalid_input("day_count", "must not be negative");
        let (status, api_error) = ApiError::from_engine_error(&error);
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(api_error.code, "VALIDATION_ERROR");
    }

    #[test]
    fn test_no_computation_maps_to_dedicated_code() {
        let (status, api_error) = ApiError::from_engine_error(&EngineError::NoComputationRequested);
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(api_error.code, "NO_COMPUTATION_REQUESTED");
    }

    #[test]
    fn test_config_error_maps_to_server_error() {
        let error = EngineError::ConfigNotFound {
            path: "/missing".to_string(),
        };
        let (status, api_error) = ApiError::from_engine_error(&error);
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.code, "CONFIG_ERROR");
    }

    #[test]
    fn test_error_response_serialization_shape() {
        let response: ApiErrorResponse = ApiError::validation_error("bad field").into();
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(json["error"]["message"], "bad field");
        assert!(json["error"].get("details").is_none());
    }

    #[test]
    fn test_settlement_response_rounds_total_half_away_from_zero() {
        use std::str::FromStr;

        let breakdown = SettlementResult {
            tenure_days: 181,
            years_worked: Decimal::from_str("0.4955").unwrap(),
            vacation_days_earned: Decimal::new(7, 0),
            vacation_days_owed: Decimal::new(7, 0),
            vacation_pay: Decimal::from_str("116666.5").unwrap(),
            variable_average: Decimal::ZERO,
            seniority_indemnity: Decimal::ZERO,
            notice_pay: Decimal::ZERO,
            base_salary: Decimal::new(500_000, 0),
            other_taxable_income: Decimal::ZERO,
            other_non_taxable_income: Decimal::ZERO,
            total: Decimal::from_str("616666.5").unwrap(),
        };
        let response =
            SettlementResponse::from_result(Uuid::new_v4(), "Art. 161".to_string(), breakdown);
        assert_eq!(response.total_rounded, Decimal::new(616_667, 0));
    }
}
