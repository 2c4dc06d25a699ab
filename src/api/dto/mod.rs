//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization; query
//! parameters are validated before reaching a service.

pub mod health;
pub mod purchase;
pub mod relay;
pub mod tracks;
