//! Repository trait (port) - defines the interface for URL mapping storage
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Every operation runs in its own atomic scope;
//! the service never needs a transaction spanning two of them.

use async_trait::async_trait;

use crate::entities::UrlMapping;
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Persist a mapping atomically.
    ///
    /// Fails with `DuplicateNormalizedUrl` when a row with the same
    /// normalized URL exists, `DuplicateShortCode` when the short code is
    /// taken, and `StorageUnavailable` for everything else. Either the row
    /// appears or nothing does; no partial state is observable.
    async fn insert(&self, mapping: &UrlMapping) -> RepoResult<()>;

    /// Point lookup by short code (case-sensitive)
    async fn find_by_short_code(&self, short_code: &str) -> RepoResult<Option<UrlMapping>>;

    /// Point lookup by already-normalized URL (byte equality)
    async fn find_by_normalized_url(&self, normalized_url: &str) -> RepoResult<Option<UrlMapping>>;

    /// Cheap connectivity probe for readiness checks
    async fn ping(&self) -> RepoResult<()>;
}
