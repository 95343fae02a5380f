//! Service metadata handlers (root, operations listing)

use axum::Json;

use super::super::types::{
    EndpointDirectory, OperationInfo, OperationsData, ServiceInfoData,
};
use crate::calculator::Operation;

/// Welcome endpoint with API information
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service metadata", body = ServiceInfoData)
    ),
    tag = "General"
)]
pub async fn root() -> Json<ServiceInfoData> {
    Json(ServiceInfoData {
        message: format!("Welcome to Calculator API v{}", env!("CARGO_PKG_VERSION")),
        description: "A simple calculator with basic arithmetic operations",
        version: env!("CARGO_PKG_VERSION"),
        endpoints: EndpointDirectory {
            documentation: "/docs",
            calculate: "POST /calculate",
            operations: "GET /operations",
        },
    })
}

/// List all supported operations
///
/// Returns exactly one entry per supported operation, with its wire
/// literal, description and display symbol.
#[utoipa::path(
    get,
    path = "/operations",
    responses(
        (status = 200, description = "Supported operations", body = OperationsData)
    ),
    tag = "General"
)]
pub async fn list_operations() -> Json<OperationsData> {
    let supported_operations = Operation::ALL
        .iter()
        .map(|op| OperationInfo {
            operation: op.as_str(),
            description: op.description(),
            symbol: op.symbol(),
        })
        .collect();

    Json(OperationsData {
        supported_operations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_operations_listing_has_four_entries() {
        let Json(data) = list_operations().await;
        assert_eq!(data.supported_operations.len(), 4);

        let literals: Vec<&str> = data
            .supported_operations
            .iter()
            .map(|o| o.operation)
            .collect();
        assert_eq!(literals, ["add", "subtract", "multiply", "divide"]);

        let symbols: Vec<&str> = data.supported_operations.iter().map(|o| o.symbol).collect();
        assert_eq!(symbols, ["+", "-", "×", "÷"]);
    }

    #[tokio::test]
    async fn test_root_lists_endpoints() {
        let Json(info) = root().await;
        assert_eq!(info.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(info.endpoints.documentation, "/docs");
    }
}
