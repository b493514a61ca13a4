//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use validator::Validate;

/// Shorten request
///
/// Emptiness and URL shape are the normalizer's concern; validation here only
/// bounds the size of what reaches it. Most browsers cap URLs around 2000
/// characters, so 2048 covers legitimate input.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ShortenRequest {
    #[validate(length(max = 2048, message = "URL must be at most 2048 characters"))]
    pub url: String,
}
