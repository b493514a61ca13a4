//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    /// Input could not be accepted as an http(s) URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// No mapping exists for the requested short code.
    #[error("short code not found: {0}")]
    ShortCodeNotFound(String),

    /// A mapping for this normalized URL already exists. The service resolves
    /// this by looking up the existing row.
    #[error("a mapping for this normalized URL already exists")]
    DuplicateNormalizedUrl,

    /// The generated short code collided with a stored one. Unreachable under
    /// correct generator behavior; the service retries a bounded number of times.
    #[error("short code already in use")]
    DuplicateShortCode,

    /// The wall clock stepped backwards past the last ID the generator handed
    /// out. Fatal for the request, not the process.
    #[error("clock moved backwards: last ID issued at {last_ms}ms, clock now reads {now_ms}ms (relative to custom epoch)")]
    ClockMovedBackwards { last_ms: i64, now_ms: i64 },

    /// The storage backend could not serve the operation.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),

    /// An invariant the service relies on was observed broken.
    #[error("internal error: {0}")]
    Internal(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidUrl(_) => "INVALID_URL",
            Self::ShortCodeNotFound(_) => "SHORT_CODE_NOT_FOUND",
            Self::DuplicateNormalizedUrl => "DUPLICATE_URL",
            Self::DuplicateShortCode => "DUPLICATE_SHORT_CODE",
            Self::ClockMovedBackwards { .. } => "CLOCK_MOVED_BACKWARDS",
            Self::StorageUnavailable(_) => "STORAGE_UNAVAILABLE",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ShortCodeNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidUrl(_))
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::DuplicateNormalizedUrl | Self::DuplicateShortCode)
    }
}
