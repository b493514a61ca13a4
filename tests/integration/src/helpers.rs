//! Test helpers for integration tests
//!
//! Provides a TestServer that runs the full axum application on an ephemeral
//! port, backed by the in-memory repository.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use reqwest::{Client, Response};
use serde::Serialize;
use shortly_api::{create_app, AppState};
use shortly_common::{
    AppConfig, AppSettings, DatabaseConfig, Environment, ServerConfig, ShortenerConfig,
    SnowflakeConfig,
};
use shortly_core::{Clock, ShortCodeGenerator, SystemClock, UrlRepository};
use shortly_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::fixtures::MemoryUrlRepository;

/// Base URL configured for test servers
pub const TEST_BASE_URL: &str = "http://sho.rt";

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    pub repo: Arc<MemoryUrlRepository>,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server over a fresh in-memory repository
    pub async fn start() -> Result<Self> {
        let repo = Arc::new(MemoryUrlRepository::new());

        let service_context = ServiceContextBuilder::new()
            .url_repo(Arc::clone(&repo) as Arc<dyn UrlRepository>)
            .short_codes(Arc::new(ShortCodeGenerator::new(
                0,
                Arc::new(SystemClock) as Arc<dyn Clock>,
            )))
            .build()
            .map_err(anyhow::Error::msg)?;

        let state = AppState::new(service_context, test_config());
        let app = create_app(state);

        // Bind an ephemeral port
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        // Redirects must stay observable: the 301 is what the tests assert on
        let client = Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr,
            client,
            repo,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> reqwest::Result<Response> {
        self.client.get(self.url(path)).send().await
    }

    /// Make a POST request with a JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> reqwest::Result<Response> {
        self.client.post(self.url(path)).json(body).send().await
    }
}

/// Configuration for test servers: fixed base URL, unused database section
fn test_config() -> AppConfig {
    AppConfig {
        app: AppSettings {
            name: "shortly-test".to_string(),
            env: Environment::Development,
        },
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseConfig {
            url: "postgresql://unused".to_string(),
            max_connections: 1,
            min_connections: 1,
        },
        shortener: ShortenerConfig {
            base_url: Some(TEST_BASE_URL.to_string()),
        },
        snowflake: SnowflakeConfig { instance_id: 0 },
    }
}
