//! Error handling utilities for repositories

use shortly_core::DomainError;
use sqlx::Error as SqlxError;

/// Name of the primary-key constraint on urls.short_code
const SHORT_CODE_CONSTRAINT: &str = "urls_pkey";

/// Convert a SQLx error to a DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::StorageUnavailable(e.to_string())
}

/// Map an insert failure, distinguishing which uniqueness constraint fired.
///
/// The urls table carries exactly two constraints: the primary key on
/// short_code and the unique index on original_url.
pub fn map_insert_error(e: SqlxError) -> DomainError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return if db_err.constraint() == Some(SHORT_CODE_CONSTRAINT) {
                DomainError::DuplicateShortCode
            } else {
                DomainError::DuplicateNormalizedUrl
            };
        }
    }
    DomainError::StorageUnavailable(e.to_string())
}
