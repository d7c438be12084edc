//! API response types

use serde::Serialize;

/// Service banner returned from the root endpoint
#[derive(Debug, Clone, Serialize)]
pub struct BannerResponse {
    /// Human-readable service name
    pub message: String,
    /// Coarse service state
    pub status: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Coarse service state
    pub status: String,
    /// Crate version serving the request
    pub version: String,
}
