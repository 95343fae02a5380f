//! Gateway types module
//!
//! Type-safe boundary enforcement for the HTTP API:
//!
//! ## Input Types
//! - [`CalculationRequest`]: calculation deserialization from HTTP requests
//! - [`ApiJson`]: axum extractor mapping schema errors to 422
//!
//! ## Output Types
//! - [`CalculationResponse`]: success body for `POST /calculate`
//! - [`ApiError`] / [`ErrorBody`]: classified error responses
//! - Metadata DTOs for `GET /` and `GET /operations`

pub mod request;
pub mod response;

// Re-export commonly used types at module root
pub use request::{ApiJson, CalculationRequest};
pub use response::{
    ApiError, ApiResult, CalculationResponse, EndpointDirectory, ErrorBody, OperationInfo,
    OperationsData, ServiceInfoData,
};
