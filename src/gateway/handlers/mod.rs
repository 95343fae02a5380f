//! HTTP route handlers

pub mod calculate;
pub mod health;
pub mod meta;

pub use calculate::calculate;
pub use health::{HealthResponse, health_check};
pub use meta::{list_operations, root};
