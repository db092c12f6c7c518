//! DTOs for health check endpoint.

use serde::Serialize;

use crate::domain::entities::NavVariant;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub nav_variant: NavVariant,
}
