//! Integration tests for the issuer-key protected link endpoints.

mod helpers;

use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_issue_requires_key() {
    let app = helpers::TestApp::new().await;

    let missing = app
        .request("POST", "/api/links", Some(helpers::sample_request(false)), None)
        .await;
    assert_eq!(missing.status, StatusCode::UNAUTHORIZED);
    assert_eq!(missing.body["error"], json!("UNAUTHORIZED"));

    let wrong = app
        .request(
            "POST",
            "/api/links",
            Some(helpers::sample_request(false)),
            Some("not-the-key"),
        )
        .await;
    assert_eq!(wrong.status, StatusCode::UNAUTHORIZED);

    let lookup = app.request("GET", "/api/links/AAAAAAAA", None, None).await;
    assert_eq!(lookup.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_issue_long_link() {
    let app = helpers::TestApp::new().await;
    let issued = app.issue(false).await;

    let token = issued["token"].as_str().unwrap();
    assert_eq!(token.split('.').count(), 2);
    assert_eq!(
        issued["verify_url"],
        json!(format!("{}/verify?t={token}", helpers::BASE_URL))
    );
    assert!(issued.get("short_url").is_none());
}

#[tokio::test]
async fn test_issue_is_deterministic_for_same_ids() {
    let app = helpers::TestApp::new().await;
    let first = app.issue(false).await;
    let second = app.issue(false).await;
    assert_eq!(first["token"], second["token"]);
}

#[tokio::test]
async fn test_issue_rejects_empty_ids() {
    let app = helpers::TestApp::new().await;

    let empty = app
        .request(
            "POST",
            "/api/links",
            Some(json!({"document_id": "", "signature_id": "sign-1", "user_id": "user-1"})),
            Some(helpers::ISSUER_KEY),
        )
        .await;
    assert_eq!(empty.status, StatusCode::BAD_REQUEST);
    assert_eq!(empty.body["error"], json!("VALIDATION_ERROR"));

    let blank = app
        .request(
            "POST",
            "/api/links",
            Some(json!({"document_id": "doc-1", "signature_id": "   ", "user_id": "user-1"})),
            Some(helpers::ISSUER_KEY),
        )
        .await;
    assert_eq!(blank.status, StatusCode::BAD_REQUEST);
    assert_eq!(blank.body["error"], json!("INVALID_PAYLOAD"));
}

#[tokio::test]
async fn test_issue_rejects_missing_fields() {
    let app = helpers::TestApp::new().await;
    let response = app
        .request(
            "POST",
            "/api/links",
            Some(json!({"document_id": "doc-1"})),
            Some(helpers::ISSUER_KEY),
        )
        .await;
    assert!(response.status.is_client_error(), "{}", response.status);
}

#[tokio::test]
async fn test_issuer_routes_absent_without_key() {
    let mut config = helpers::test_config();
    config.server.issuer_api_key = None;
    let app = helpers::TestApp::with_config(config).await;

    let response = app
        .request(
            "POST",
            "/api/links",
            Some(helpers::sample_request(false)),
            Some(helpers::ISSUER_KEY),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_blank_issuer_key_does_not_open_issuing() {
    let mut config = helpers::test_config();
    config.server.issuer_api_key = Some(String::new());
    let app = helpers::TestApp::with_config(config).await;

    let response = app
        .request(
            "POST",
            "/api/links",
            Some(helpers::sample_request(false)),
            Some(""),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
