//! API response types and error mapping
//!
//! - `CalculationResponse`: success body for `POST /calculate`
//! - `ErrorBody`: the `{"detail": ...}` error body shared by all errors
//! - `ApiError`: status + detail, translated once at the HTTP boundary
//! - Metadata DTOs for `GET /` and `GET /operations`

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::calculator::CalcError;

// ============================================================================
// Success DTOs
// ============================================================================

/// Result of a performed calculation
///
/// Echoes the operation and both operands alongside the result. Operands
/// and result stay `f64` end-to-end, so integral values render as floats
/// (`15.0`).
#[derive(Debug, Serialize, ToSchema)]
pub struct CalculationResponse {
    /// The operation that was performed
    #[schema(example = "add")]
    pub operation: String,
    /// First operand
    #[schema(example = 10.0)]
    pub num1: f64,
    /// Second operand
    #[schema(example = 5.0)]
    pub num2: f64,
    /// The calculated result
    #[schema(example = 15.0)]
    pub result: f64,
}

/// One entry of the supported-operations listing
#[derive(Debug, Serialize, ToSchema)]
pub struct OperationInfo {
    /// Wire literal accepted by `POST /calculate`
    #[schema(example = "add")]
    pub operation: &'static str,
    /// Human-readable description
    #[schema(example = "Addition (a + b)")]
    pub description: &'static str,
    /// Display symbol
    #[schema(example = "+")]
    pub symbol: &'static str,
}

/// Body of `GET /operations`
#[derive(Debug, Serialize, ToSchema)]
pub struct OperationsData {
    /// Exactly one entry per supported operation
    pub supported_operations: Vec<OperationInfo>,
}

/// Endpoint directory included in the service metadata
#[derive(Debug, Serialize, ToSchema)]
pub struct EndpointDirectory {
    #[schema(example = "/docs")]
    pub documentation: &'static str,
    #[schema(example = "POST /calculate")]
    pub calculate: &'static str,
    #[schema(example = "GET /operations")]
    pub operations: &'static str,
}

/// Body of `GET /` - static service metadata
#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceInfoData {
    #[schema(example = "Welcome to Calculator API")]
    pub message: String,
    #[schema(example = "A simple calculator with basic arithmetic operations")]
    pub description: &'static str,
    #[schema(example = "1.0.0")]
    pub version: &'static str,
    pub endpoints: EndpointDirectory,
}

// ============================================================================
// Error Mapping
// ============================================================================

/// Error body shared by every non-2xx response
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable failure description
    #[schema(example = "Cannot divide by zero")]
    pub detail: String,
}

/// Classified API error: HTTP status plus a `detail` message
///
/// Every error leaving the gateway goes through this type exactly once;
/// nothing is retried or recovered internally.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
}

impl ApiError {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }

    /// Domain error (semantically invalid operands) -> 400
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, detail)
    }

    /// Schema validation error (shape/type mismatch) -> 422
    pub fn unprocessable(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, detail)
    }

    /// Unclassified fault -> 500, raw message kept for diagnostics
    pub fn internal(message: impl std::fmt::Display) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("An error occurred: {}", message),
        )
    }
}

impl From<CalcError> for ApiError {
    fn from(err: CalcError) -> Self {
        match err {
            CalcError::DivisionByZero => ApiError::bad_request(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody { detail: self.detail })).into_response()
    }
}

/// Handler result: JSON success body or a classified error
pub type ApiResult<T> = Result<Json<T>, ApiError>;
