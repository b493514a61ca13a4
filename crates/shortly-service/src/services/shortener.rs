//! Shortener service
//!
//! Orchestrates validation → normalization → code generation →
//! try-insert / catch-duplicate / select-existing. Atomicity for the
//! idempotency guarantee is delegated to the storage layer's uniqueness
//! constraint; no in-process locking over URLs.

use tracing::{error, info, instrument, warn};

use shortly_core::{normalize, DomainError, UrlMapping};

use crate::dto::ShortenResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Upper bound on whole-protocol retries after a short-code collision.
/// Unreachable under correct generator behavior.
const MAX_CODE_ATTEMPTS: u32 = 3;

/// Shortener service
pub struct ShortenerService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ShortenerService<'a> {
    /// Create a new ShortenerService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Shorten a raw URL, returning the stored short code for it.
    ///
    /// Concurrent calls with the same normalized URL all return the same
    /// code: one insert wins the uniqueness race and every loser resolves the
    /// winner's row. The follow-up lookup runs as its own atomic operation -
    /// it must never share a transaction with the failed insert.
    #[instrument(skip(self, raw_url, base_url))]
    pub async fn shorten(&self, raw_url: &str, base_url: &str) -> ServiceResult<ShortenResponse> {
        let normalized = normalize(raw_url)?;

        for attempt in 1..=MAX_CODE_ATTEMPTS {
            let code = self.ctx.short_codes().next_short_code()?;
            let mapping = UrlMapping::new(code.clone(), normalized.clone());

            match self.ctx.url_repo().insert(&mapping).await {
                Ok(()) => {
                    info!(short_code = %code, "URL mapping created");
                    return Ok(ShortenResponse::new(code, base_url));
                }
                Err(DomainError::DuplicateNormalizedUrl) => {
                    return self.resolve_existing(&normalized, base_url).await;
                }
                Err(DomainError::DuplicateShortCode) => {
                    warn!(short_code = %code, attempt, "short code collision, regenerating");
                    continue;
                }
                Err(e) => return Err(e.into()),
            }
        }

        error!(
            attempts = MAX_CODE_ATTEMPTS,
            "short code collisions exhausted all retries"
        );
        Err(ServiceError::internal(
            "could not produce an unused short code",
        ))
    }

    /// Resolve a short code to the stored URL.
    ///
    /// Read-only point lookup, case-sensitive, no counters or caches touched.
    #[instrument(skip(self))]
    pub async fn resolve(&self, short_code: &str) -> ServiceResult<String> {
        let mapping = self
            .ctx
            .url_repo()
            .find_by_short_code(short_code)
            .await?
            .ok_or_else(|| DomainError::ShortCodeNotFound(short_code.to_string()))?;

        Ok(mapping.normalized_url)
    }

    /// Idempotency branch: another insert won the race, so return its code.
    async fn resolve_existing(
        &self,
        normalized: &str,
        base_url: &str,
    ) -> ServiceResult<ShortenResponse> {
        match self.ctx.url_repo().find_by_normalized_url(normalized).await? {
            Some(existing) => {
                info!(short_code = %existing.short_code, "existing mapping reused");
                Ok(ShortenResponse::new(existing.short_code, base_url))
            }
            None => {
                // Storage reported a uniqueness conflict but shows no row:
                // isolation semantics are broken.
                error!("constraint violation without visible row");
                Err(ServiceError::internal(
                    "constraint violation without visible row",
                ))
            }
        }
    }
}
