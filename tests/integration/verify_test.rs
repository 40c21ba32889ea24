//! Integration tests for public token verification.

mod helpers;

use std::io;
use std::sync::{Arc, Mutex};

use http::StatusCode;
use serde_json::json;

use verilink_auth::{TokenCodec, VerifyFields};

#[tokio::test]
async fn test_verify_valid_token() {
    let app = helpers::TestApp::new().await;
    let issued = app.issue(false).await;
    let token = issued["token"].as_str().unwrap();

    let response = app
        .request("GET", &format!("/verify?t={token}"), None, None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({
            "ok": true,
            "payload": {"d": "doc-1", "s": "sign-1", "u": "user-1", "v": 1}
        })
    );
}

#[tokio::test]
async fn test_verify_url_from_issue_resolves() {
    let app = helpers::TestApp::new().await;
    let issued = app.issue(false).await;
    let verify_url = issued["verify_url"].as_str().unwrap();
    assert!(verify_url.starts_with(&format!("{}/verify?t=", helpers::BASE_URL)));

    let response = app
        .request("GET", helpers::path_of(verify_url), None, None)
        .await;
    assert_eq!(response.body["ok"], json!(true));
}

#[tokio::test]
async fn test_verify_tampered_token() {
    let app = helpers::TestApp::new().await;
    let issued = app.issue(false).await;
    let token = issued["token"].as_str().unwrap();

    let mut tampered = token.to_string();
    let last = tampered.pop().unwrap();
    tampered.push(if last == 'A' { 'B' } else { 'A' });

    let response = app
        .request("GET", &format!("/verify?t={tampered}"), None, None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({"ok": false}));
}

#[tokio::test]
async fn test_verify_malformed_and_missing() {
    let app = helpers::TestApp::new().await;

    for path in ["/verify?t=not-a-token", "/verify?t=", "/verify?t=a.b.c", "/verify"] {
        let response = app.request("GET", path, None, None).await;
        assert_eq!(response.status, StatusCode::OK, "{path}");
        assert_eq!(response.body, json!({"ok": false}), "{path}");
    }
}

#[tokio::test]
async fn test_verify_rejects_other_secret() {
    let app = helpers::TestApp::new().await;
    let other = TokenCodec::from_secret(b"some-other-deployment-secret-value").unwrap();
    let token = other
        .build_token(&VerifyFields::new("doc-1", "sign-1", "user-1"))
        .unwrap();

    let response = app
        .request("GET", &format!("/verify?t={token}"), None, None)
        .await;
    assert_eq!(response.body, json!({"ok": false}));
}

#[tokio::test]
async fn test_health() {
    let app = helpers::TestApp::new().await;
    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], json!("ok"));
    assert_eq!(response.body["short_links"]["backend"], json!("memory"));
    assert_eq!(response.body["short_links"]["healthy"], json!(true));
}

/// Log sink shared between the subscriber and the test.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[tokio::test]
async fn test_verify_request_logs_omit_token() {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let app = helpers::TestApp::new().await;
    let issued = app.issue(false).await;
    let token = issued["token"].as_str().unwrap();

    let response = app
        .request("GET", &format!("/verify?t={token}"), None, None)
        .await;
    assert_eq!(response.body["ok"], json!(true));

    let output = String::from_utf8_lossy(&logs.0.lock().unwrap()).into_owned();
    assert!(output.contains("/verify"), "request was not logged:\n{output}");
    assert!(!output.contains(token), "token leaked into logs:\n{output}");
}
