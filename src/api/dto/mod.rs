//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization, validator for
//! input validation and utoipa for the published OpenAPI schema.

pub mod health;
pub mod user;
