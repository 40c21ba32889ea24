//! Integration tests for short-link redirects and lookups.

mod helpers;

use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_short_link_redirects_to_verify_url() {
    let app = helpers::TestApp::new().await;
    let issued = app.issue(true).await;
    let short_url = issued["short_url"].as_str().unwrap();
    assert!(short_url.starts_with(&format!("{}/s/", helpers::BASE_URL)));

    let response = app
        .request("GET", helpers::path_of(short_url), None, None)
        .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    let location = response.location.unwrap();
    assert_eq!(location, issued["verify_url"].as_str().unwrap());

    let followed = app
        .request("GET", helpers::path_of(&location), None, None)
        .await;
    assert_eq!(followed.body["ok"], json!(true));
    assert_eq!(followed.body["payload"]["d"], json!("doc-1"));
}

#[tokio::test]
async fn test_unknown_code_is_404() {
    let app = helpers::TestApp::new().await;

    for path in ["/s/AAAAAAAA", "/s/does-not-exist"] {
        let response = app.request("GET", path, None, None).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND, "{path}");
        assert_eq!(response.body["error"], json!("NOT_FOUND"));
    }
}

#[tokio::test]
async fn test_lookup_code_through_api() {
    let app = helpers::TestApp::new().await;
    let issued = app.issue(true).await;
    let code = issued["short_url"]
        .as_str()
        .unwrap()
        .rsplit('/')
        .next()
        .unwrap()
        .to_string();

    let response = app
        .request(
            "GET",
            &format!("/api/links/{code}"),
            None,
            Some(helpers::ISSUER_KEY),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["code"], json!(code));
    assert_eq!(response.body["token"], issued["token"]);
    assert_eq!(response.body["verification"]["ok"], json!(true));

    let missing = app
        .request("GET", "/api/links/AAAAAAAA", None, Some(helpers::ISSUER_KEY))
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_custom_prefix() {
    let mut config = helpers::test_config();
    config.shortlink.public_prefix = "/v".to_string();
    let app = helpers::TestApp::with_config(config).await;

    let issued = app.issue(true).await;
    let short_url = issued["short_url"].as_str().unwrap();
    assert!(short_url.starts_with(&format!("{}/v/", helpers::BASE_URL)));

    let response = app
        .request("GET", helpers::path_of(short_url), None, None)
        .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn test_disabled_short_links_fall_back() {
    let mut config = helpers::test_config();
    config.shortlink.enabled = false;
    let app = helpers::TestApp::with_config(config).await;

    let issued = app.issue(true).await;
    assert!(issued.get("short_url").is_none());
    assert!(issued["verify_url"].as_str().is_some());

    let response = app.request("GET", "/s/AAAAAAAA", None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let health = app.request("GET", "/api/health", None, None).await;
    assert!(health.body.get("short_links").is_none());
}

#[tokio::test]
async fn test_disabled_short_links_without_fallback() {
    let mut config = helpers::test_config();
    config.shortlink.enabled = false;
    config.shortlink.fallback_to_long_url = false;
    let app = helpers::TestApp::with_config(config).await;

    let response = app
        .request(
            "POST",
            "/api/links",
            Some(helpers::sample_request(true)),
            Some(helpers::ISSUER_KEY),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], json!("FEATURE_DISABLED"));
}

#[tokio::test]
async fn test_short_link_from_service_resolves_over_http() {
    let app = helpers::TestApp::new().await;
    let fields = verilink_auth::VerifyFields::new("doc-9", "sign-9", "user-9");
    let short_url = app
        .state
        .links
        .build_short_verify_url(&fields)
        .await
        .unwrap();

    let response = app
        .request("GET", helpers::path_of(&short_url), None, None)
        .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
}
