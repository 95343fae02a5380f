//! Calculation handler (POST /calculate)

use std::sync::Arc;

use axum::{Json, extract::State};

use super::super::state::AppState;
use super::super::types::{
    ApiJson, ApiResult, CalculationRequest, CalculationResponse, ErrorBody,
};

/// Perform a calculation
///
/// The request is schema-validated by the [`ApiJson`] extractor before
/// this handler runs, so `operation` is always one of the four known
/// kinds here. The arithmetic itself is a pure function; the only
/// error it can surface is division by zero, mapped to 400.
#[utoipa::path(
    post,
    path = "/calculate",
    request_body = CalculationRequest,
    responses(
        (status = 200, description = "Calculation result", body = CalculationResponse),
        (status = 400, description = "Division by zero", body = ErrorBody),
        (status = 422, description = "Malformed request body", body = ErrorBody),
        (status = 500, description = "Internal fault", body = ErrorBody)
    ),
    tag = "Calculator"
)]
pub async fn calculate(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<CalculationRequest>,
) -> ApiResult<CalculationResponse> {
    let result = req.operation.apply(req.num1, req.num2).inspect_err(|e| {
        tracing::warn!(
            operation = %req.operation,
            num1 = req.num1,
            num2 = req.num2,
            "calculation rejected: {}",
            e
        );
    })?;

    let seq = state.record_calculation();
    tracing::info!(
        operation = %req.operation,
        num1 = req.num1,
        num2 = req.num2,
        result,
        served = seq,
        "calculation served"
    );

    Ok(Json(CalculationResponse {
        operation: req.operation.to_string(),
        num1: req.num1,
        num2: req.num2,
        result,
    }))
}
