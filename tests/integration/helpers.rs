//! Shared test helpers for integration tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::header::LOCATION;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use verilink_api::{AppState, build_app};
use verilink_core::config::AppConfig;

/// Signing secret used by every test app.
pub const SECRET: &str = "integration-test-secret-0123456789abcdef";
/// Public base URL used by every test app.
pub const BASE_URL: &str = "https://verify.hockey.example";
/// Issuer key accepted by the test app.
pub const ISSUER_KEY: &str = "issuer-test-key";

/// Config with short links on the memory backend and the issuer API mounted.
pub fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.verify.hmac_secret = SECRET.to_string();
    config.verify.base_url = BASE_URL.to_string();
    config.server.issuer_api_key = Some(ISSUER_KEY.to_string());
    config.shortlink.enabled = true;
    config
}

/// Strip the public base URL, leaving the path the router sees.
pub fn path_of(url: &str) -> &str {
    url.strip_prefix(BASE_URL).expect("URL outside the base URL")
}

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Shared state, for direct service calls
    pub state: AppState,
}

impl TestApp {
    /// Create a test application with [`test_config`]
    pub async fn new() -> Self {
        Self::with_config(test_config()).await
    }

    /// Create a test application with a custom config
    pub async fn with_config(config: AppConfig) -> Self {
        let state = AppState::from_config(config)
            .await
            .expect("Failed to build app state");
        let router = build_app(state.clone());
        Self { router, state }
    }

    /// Issue a link for the standard sample ids through the API
    pub async fn issue(&self, short: bool) -> Value {
        let response = self
            .request(
                "POST",
                "/api/links",
                Some(sample_request(short)),
                Some(ISSUER_KEY),
            )
            .await;
        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Issue failed: {:?}",
            response.body
        );
        response.body
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            location,
            body,
        }
    }
}

/// `POST /api/links` body for the sample ids
pub fn sample_request(short: bool) -> Value {
    serde_json::json!({
        "document_id": "doc-1",
        "signature_id": "sign-1",
        "user_id": "user-1",
        "short": short,
    })
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// `Location` header, for redirects
    pub location: Option<String>,
    /// Parsed JSON body
    pub body: Value,
}
