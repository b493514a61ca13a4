//! Service context - dependency container for services
//!
//! Holds the repository and the short-code generator. Collaborators are
//! passed in explicitly so tests can substitute fakes.

use std::sync::Arc;

use shortly_core::{ShortCodeGenerator, UrlRepository};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    url_repo: Arc<dyn UrlRepository>,
    short_codes: Arc<ShortCodeGenerator>,
}

impl ServiceContext {
    /// Get the URL repository
    pub fn url_repo(&self) -> &dyn UrlRepository {
        self.url_repo.as_ref()
    }

    /// Get the short-code generator
    pub fn short_codes(&self) -> &ShortCodeGenerator {
        self.short_codes.as_ref()
    }
}

/// Builder for ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    url_repo: Option<Arc<dyn UrlRepository>>,
    short_codes: Option<Arc<ShortCodeGenerator>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn url_repo(mut self, repo: Arc<dyn UrlRepository>) -> Self {
        self.url_repo = Some(repo);
        self
    }

    pub fn short_codes(mut self, generator: Arc<ShortCodeGenerator>) -> Self {
        self.short_codes = Some(generator);
        self
    }

    /// Build the context, failing if a dependency is missing
    pub fn build(self) -> Result<ServiceContext, String> {
        Ok(ServiceContext {
            url_repo: self.url_repo.ok_or("url_repo is required")?,
            short_codes: self.short_codes.ok_or("short_codes is required")?,
        })
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext").finish()
    }
}
