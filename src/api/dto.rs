//! Data Transfer Objects
//!
//! Response types owned by the gateway itself. Telemetry and compliance
//! payloads live with their domain modules.

use serde::{Deserialize, Serialize};

/// Mock IAM token response
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Opaque bearer token
    pub access_token: String,
    /// Always "Bearer"
    pub token_type: String,
    /// Advertised lifetime in seconds
    pub expires_in: u64,
    /// Granted scope
    pub scope: String,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// "active" while the server is up
    pub status: String,
    /// Service name
    pub service: String,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
    /// Meters that have reported at least once
    pub meters: usize,
    /// Answer engine mode: "llm" or "simulation"
    pub intelligence: String,
}
