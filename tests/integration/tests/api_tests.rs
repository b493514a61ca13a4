//! End-to-end API tests
//!
//! The full axum application runs in-process over an in-memory repository,
//! so these tests need no external services.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{ErrorEnvelope, ShortenBody, ShortenReply, TestServer};
use reqwest::StatusCode;

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_eq!(response.status(), StatusCode::OK);
}

// ============================================================================
// Shorten + redirect
// ============================================================================

#[tokio::test]
async fn test_shorten_then_redirect() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post(
            "/api/shorten",
            &ShortenBody::new("https://example.com/very/long/path"),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let reply: ShortenReply = response.json().await.unwrap();
    assert!(!reply.short_code.is_empty());
    assert_eq!(reply.short_url, format!("http://sho.rt/{}", reply.short_code));

    let redirect = server
        .get(&format!("/{}", reply.short_code))
        .await
        .unwrap();
    assert_eq!(redirect.status(), StatusCode::MOVED_PERMANENTLY);
    assert_eq!(
        redirect.headers().get("location").unwrap(),
        "https://example.com/very/long/path"
    );
}

#[tokio::test]
async fn test_shorten_is_idempotent_across_case_and_whitespace() {
    let server = TestServer::start().await.expect("Failed to start server");

    let first: ShortenReply = server
        .post("/api/shorten", &ShortenBody::new("  HTTPS://EXAMPLE.COM/p  "))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let second: ShortenReply = server
        .post("/api/shorten", &ShortenBody::new("https://example.com/p"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(first.short_code, second.short_code);
    assert_eq!(server.repo.row_count(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_concurrent_shortens_return_one_code() {
    let server = TestServer::start().await.expect("Failed to start server");

    let mut handles = Vec::new();
    for _ in 0..50 {
        let client = server.client.clone();
        let url = server.url("/api/shorten");
        handles.push(tokio::spawn(async move {
            let reply: ShortenReply = client
                .post(url)
                .json(&ShortenBody::new("https://example.com"))
                .send()
                .await
                .unwrap()
                .json()
                .await
                .unwrap();
            reply.short_code
        }));
    }

    let mut codes = Vec::new();
    for handle in handles {
        codes.push(handle.await.unwrap());
    }

    let first = &codes[0];
    assert!(
        codes.iter().all(|c| c == first),
        "all 50 responses must carry the same code"
    );
    assert_eq!(server.repo.row_count(), 1);
}

#[tokio::test]
async fn test_distinct_urls_get_distinct_codes() {
    let server = TestServer::start().await.expect("Failed to start server");

    let a: ShortenReply = server
        .post("/api/shorten", &ShortenBody::new("https://a.example"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let b: ShortenReply = server
        .post("/api/shorten", &ShortenBody::new("https://b.example"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_ne!(a.short_code, b.short_code);
    assert_eq!(server.repo.row_count(), 2);
}

// ============================================================================
// Error responses
// ============================================================================

#[tokio::test]
async fn test_unknown_code_returns_404_envelope() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/does-not-exist").await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let envelope: ErrorEnvelope = response.json().await.unwrap();
    assert_eq!(envelope.error, "SHORT_CODE_NOT_FOUND");
    assert!(envelope.message.contains("does-not-exist"));
    assert!(envelope.timestamp.contains('T'));
}

#[tokio::test]
async fn test_invalid_url_returns_400_envelope() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/api/shorten", &ShortenBody::new("not-a-url"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let envelope: ErrorEnvelope = response.json().await.unwrap();
    assert_eq!(envelope.error, "INVALID_URL");
}

#[tokio::test]
async fn test_blank_url_returns_400() {
    let server = TestServer::start().await.expect("Failed to start server");

    for raw in ["", "   "] {
        let response = server
            .post("/api/shorten", &ShortenBody::new(raw))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "input {raw:?}");

        let envelope: ErrorEnvelope = response.json().await.unwrap();
        assert_eq!(envelope.error, "INVALID_URL");
    }
}

#[tokio::test]
async fn test_non_http_scheme_returns_400() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/api/shorten", &ShortenBody::new("ftp://example.com/file"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_short_codes_are_case_sensitive() {
    let server = TestServer::start().await.expect("Failed to start server");

    let reply: ShortenReply = server
        .post("/api/shorten", &ShortenBody::new("https://example.com/case"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    // Flip the case of an alphabetic character; the flipped code must miss
    let flipped: String = reply
        .short_code
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() {
                c.to_ascii_uppercase()
            } else if c.is_ascii_uppercase() {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect();

    if flipped != reply.short_code {
        let response = server.get(&format!("/{flipped}")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    let response = server.get(&format!("/{}", reply.short_code)).await.unwrap();
    assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
}

#[tokio::test]
async fn test_malformed_json_returns_400() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .client
        .post(server.url("/api/shorten"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_overlong_url_returns_400() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post(
            "/api/shorten",
            &ShortenBody::new(format!("https://example.com/{}", "a".repeat(3000))),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
