//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Field names are
//! camelCase on the wire.

use serde::Serialize;

/// Successful shorten response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub short_code: String,
    pub short_url: String,
}

impl ShortenResponse {
    /// Build a response for `short_code` under the given base URL.
    pub fn new(short_code: String, base_url: &str) -> Self {
        let short_url = format!("{}/{}", base_url.trim_end_matches('/'), short_code);
        Self {
            short_code,
            short_url,
        }
    }
}

/// Liveness response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self { status: "ok" }
    }
}

/// Readiness response with per-dependency health
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub checks: ReadinessChecks,
}

/// Individual dependency checks
#[derive(Debug, Serialize)]
pub struct ReadinessChecks {
    pub database: bool,
}

impl ReadinessResponse {
    pub fn ready(database: bool) -> Self {
        Self {
            status: if database { "ready" } else { "not_ready" },
            checks: ReadinessChecks { database },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.checks.database
    }
}
