//! Request deserialization and schema validation
//!
//! - `CalculationRequest`: HTTP request deserialization
//! - `ApiJson`: axum extractor that turns every body rejection into a
//!   422 `{"detail": ...}` response, so malformed input never reaches
//!   the dispatch logic

use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::Deserialize;
use utoipa::ToSchema;

use super::response::ApiError;
use crate::calculator::Operation;

/// Custom deserializer enforcing finite operands
///
/// JSON itself cannot encode NaN/Inf, but the invariant belongs to the
/// type boundary, not to an assumption about the transport.
fn deserialize_finite_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if !value.is_finite() {
        return Err(serde::de::Error::custom("operand must be a finite number"));
    }
    Ok(value)
}

/// Calculation request (HTTP request deserialization)
///
/// `operation` must be one of the four lowercase literals; anything else
/// fails deserialization before dispatch runs. Operands are finite
/// doubles with no range restriction.
#[derive(Debug, Clone, Copy, Deserialize, ToSchema)]
pub struct CalculationRequest {
    /// The mathematical operation to perform
    #[schema(example = "add")]
    pub operation: Operation,
    /// First operand
    #[serde(deserialize_with = "deserialize_finite_f64")]
    #[schema(example = 10.0)]
    pub num1: f64,
    /// Second operand
    #[serde(deserialize_with = "deserialize_finite_f64")]
    #[schema(example = 5.0)]
    pub num2: f64,
}

/// JSON extractor with schema-error classification
///
/// Wraps [`axum::Json`] and maps every [`JsonRejection`] (missing field,
/// wrong type, unrecognized operation, syntactically broken body) to
/// 422 Unprocessable Entity with the shared `{"detail": ...}` error body.
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => Err(classify_rejection(&rejection)),
        }
    }
}

fn classify_rejection(rejection: &JsonRejection) -> ApiError {
    ApiError::unprocessable(rejection.body_text())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request_parses() {
        let req: CalculationRequest =
            serde_json::from_str(r#"{"operation": "add", "num1": 10, "num2": 5}"#).unwrap();
        assert_eq!(req.operation, Operation::Add);
        assert_eq!(req.num1, 10.0);
        assert_eq!(req.num2, 5.0);
    }

    #[test]
    fn test_unrecognized_operation_rejected() {
        let err = serde_json::from_str::<CalculationRequest>(
            r#"{"operation": "modulo", "num1": 1, "num2": 2}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("modulo"));
    }

    #[test]
    fn test_non_numeric_operand_rejected() {
        assert!(
            serde_json::from_str::<CalculationRequest>(
                r#"{"operation": "subtract", "num1": "x", "num2": 1}"#,
            )
            .is_err()
        );
    }

    #[test]
    fn test_missing_field_rejected() {
        assert!(
            serde_json::from_str::<CalculationRequest>(r#"{"operation": "add", "num1": 1}"#)
                .is_err()
        );
    }

    #[test]
    fn test_operation_literals_case_sensitive() {
        assert!(
            serde_json::from_str::<CalculationRequest>(
                r#"{"operation": "ADD", "num1": 1, "num2": 2}"#,
            )
            .is_err()
        );
    }
}
