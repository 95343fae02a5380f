//! OpenAPI / Swagger UI documentation
//!
//! - Swagger UI: `http://localhost:8000/docs`
//! - OpenAPI JSON: `http://localhost:8000/api-docs/openapi.json`

use utoipa::OpenApi;

// Import handler types for schema registration
use crate::calculator::Operation;
use crate::gateway::handlers::HealthResponse;
use crate::gateway::types::{
    CalculationRequest, CalculationResponse, EndpointDirectory, ErrorBody, OperationInfo,
    OperationsData, ServiceInfoData,
};

/// Main API documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Calculator API",
        version = "1.0.0",
        description = "A simple calculator API with basic arithmetic operations.",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8000", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::meta::root,
        crate::gateway::handlers::meta::list_operations,
        crate::gateway::handlers::calculate::calculate,
        crate::gateway::handlers::health::health_check,
    ),
    components(
        schemas(
            Operation,
            CalculationRequest,
            CalculationResponse,
            OperationInfo,
            OperationsData,
            ServiceInfoData,
            EndpointDirectory,
            ErrorBody,
            HealthResponse,
        )
    ),
    tags(
        (name = "General", description = "Service metadata"),
        (name = "Calculator", description = "Arithmetic operations"),
        (name = "System", description = "Health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_spec_generates() {
        let spec = ApiDoc::openapi();
        assert_eq!(spec.info.title, "Calculator API");
        assert_eq!(spec.info.version, "1.0.0");
    }

    #[test]
    fn test_openapi_json_serializable() {
        let spec = ApiDoc::openapi();
        let json = spec.to_json();
        assert!(json.is_ok());
        assert!(json.unwrap().contains("Calculator API"));
    }

    #[test]
    fn test_endpoints_registered() {
        let spec = ApiDoc::openapi();
        let paths = spec.paths;
        assert!(paths.paths.contains_key("/"));
        assert!(paths.paths.contains_key("/operations"));
        assert!(paths.paths.contains_key("/calculate"));
        assert!(paths.paths.contains_key("/health"));
    }
}
