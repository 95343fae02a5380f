//! calc-api - Calculator HTTP API
//!
//! A single-binary calculator service: validate a calculation request,
//! dispatch to the matching arithmetic function, and return a structured
//! result or a classified error.
//!
//! # Modules
//!
//! - [`calculator`] - Operation enum, pure dispatch, domain errors
//! - [`gateway`] - axum router, handlers, request/response types, OpenAPI
//! - [`config`] - YAML configuration per environment
//! - [`logging`] - tracing initialization (rolling file + stdout)

pub mod calculator;
pub mod config;
pub mod gateway;
pub mod logging;

// Convenient re-exports at crate root
pub use calculator::{CalcError, Operation};
pub use config::AppConfig;
pub use gateway::types::{CalculationRequest, CalculationResponse};
