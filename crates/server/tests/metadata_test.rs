//! Integration tests for the `/metadata` endpoint.

mod common;

use common::{mount_page, TestApp};
use serde_json::{json, Value};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

const PAGE: &str = r#"
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Acme Widgets</title>
    <meta name="description" content="Widgets for every occasion.">
    <meta property="og:title" content="Acme Widgets (OG)">
    <meta property="og:image" content="https://cdn.acme.test/og.png">
    <link rel="canonical" href="https://acme.test/">
    <link rel="icon" href="/favicon.ico">
</head>
<body></body>
</html>
"#;

#[tokio::test]
async fn test_metadata_rejects_missing_url() {
    let app = TestApp::spawn(None).await;

    let response = app
        .client
        .post(format!("{}/metadata", app.address))
        .json(&json!({}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["message"], "URL is required");
}

#[tokio::test]
async fn test_metadata_rejects_non_string_url() {
    let app = TestApp::spawn(None).await;

    let response = app
        .client
        .post(format!("{}/metadata", app.address))
        .json(&json!({ "url": 123 }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_metadata_happy_path_returns_camel_case_fields() {
    let app = TestApp::spawn(None).await;
    let site = MockServer::start().await;
    mount_page(&site, PAGE).await;

    let response = app
        .client
        .post(format!("{}/metadata", app.address))
        .json(&json!({ "url": site.uri() }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["title"], "Acme Widgets");
    assert_eq!(body["description"], "Widgets for every occasion.");
    assert_eq!(body["ogTitle"], "Acme Widgets (OG)");
    assert_eq!(body["ogImage"], "https://cdn.acme.test/og.png");
    assert_eq!(body["canonicalUrl"], "https://acme.test/");
    assert_eq!(body["favicon"], "/favicon.ico");
    assert_eq!(body["language"], "en");
    // No robots.txt or sitemap on the mock site; the booleans are still present.
    assert_eq!(body["sitemapExists"], false);
    assert_eq!(body["robotsTxtExists"], false);
    // Absent fields are omitted, not serialized as null.
    assert!(body.get("keywords").is_none());
}

#[tokio::test]
async fn test_metadata_upstream_error_maps_to_bad_gateway() {
    let app = TestApp::spawn(None).await;
    let site = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&site)
        .await;

    let response = app
        .client
        .post(format!("{}/metadata", app.address))
        .json(&json!({ "url": site.uri() }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 502);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"]["code"], "EXTERNAL_SERVICE_ERROR");
}

#[tokio::test]
async fn test_metadata_invalid_url_maps_to_validation_error() {
    let app = TestApp::spawn(None).await;

    let response = app
        .client
        .post(format!("{}/metadata", app.address))
        .json(&json!({ "url": "not a url" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_health_check() {
    let app = TestApp::spawn(None).await;

    let response = app
        .client
        .get(format!("{}/health", app.address))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), "OK");
}
