//! Test fixtures - in-memory repository and wire-format DTOs

use async_trait::async_trait;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use shortly_core::{DomainError, RepoResult, UrlMapping, UrlRepository};

/// In-memory implementation of UrlRepository.
///
/// One mutex guards the whole store, so each operation is atomic and the
/// uniqueness checks mirror the database constraints: normalized URL first,
/// then short code.
#[derive(Default)]
pub struct MemoryUrlRepository {
    rows: Mutex<HashMap<String, UrlMapping>>,
}

impl MemoryUrlRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored rows
    pub fn row_count(&self) -> usize {
        self.rows.lock().len()
    }
}

#[async_trait]
impl UrlRepository for MemoryUrlRepository {
    async fn insert(&self, mapping: &UrlMapping) -> RepoResult<()> {
        let mut rows = self.rows.lock();
        if rows
            .values()
            .any(|m| m.normalized_url == mapping.normalized_url)
        {
            return Err(DomainError::DuplicateNormalizedUrl);
        }
        if rows.contains_key(&mapping.short_code) {
            return Err(DomainError::DuplicateShortCode);
        }
        rows.insert(mapping.short_code.clone(), mapping.clone());
        Ok(())
    }

    async fn find_by_short_code(&self, short_code: &str) -> RepoResult<Option<UrlMapping>> {
        Ok(self.rows.lock().get(short_code).cloned())
    }

    async fn find_by_normalized_url(&self, normalized_url: &str) -> RepoResult<Option<UrlMapping>> {
        Ok(self
            .rows
            .lock()
            .values()
            .find(|m| m.normalized_url == normalized_url)
            .cloned())
    }

    async fn ping(&self) -> RepoResult<()> {
        Ok(())
    }
}

/// Request body for POST /api/shorten
#[derive(Debug, Serialize)]
pub struct ShortenBody {
    pub url: String,
}

impl ShortenBody {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// Response body of POST /api/shorten
#[derive(Debug, Deserialize)]
pub struct ShortenReply {
    #[serde(rename = "shortCode")]
    pub short_code: String,
    #[serde(rename = "shortUrl")]
    pub short_url: String,
}

/// Error envelope carried by every 4xx/5xx response
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: String,
    pub message: String,
    pub timestamp: String,
}
