//! UrlMapping database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the urls table
#[derive(Debug, Clone, FromRow)]
pub struct UrlMappingModel {
    pub short_code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
}
