//! Integration tests for the `/generate` endpoint.

mod common;

use common::{ai_endpoint, mount_ai_response, mount_page, TestApp};
use serde_json::{json, Value};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

const PAGE_WITHOUT_ASSETS: &str = r#"
<html lang="en">
<head>
    <title>Acme Widgets</title>
    <meta name="description" content="Widgets for every occasion.">
    <link rel="canonical" href="https://acme.test/widgets">
</head>
<body></body>
</html>
"#;

const AI_CONTENT: &str = r#"```json
{
  "metadata": {
    "title": "Acme Widgets | Premium Widgets Online",
    "ogTitle": "Premium Widgets by Acme",
    "ogDescription": "Hand-finished widgets, shipped worldwide.",
    "ogType": "website",
    "ogImage": "https://fabricated.example/og.png",
    "canonicalUrl": "https://fabricated.example/"
  },
  "aiAnalysis": {
    "missingFields": [],
    "improvements": ["Add structured data for products."],
    "seoScore": 72,
    "summary": "Decent basics, missing social assets."
  }
}
```"#;

#[tokio::test]
async fn test_generate_rejects_empty_payload() {
    let ai = MockServer::start().await;
    let app = TestApp::spawn(Some(ai_endpoint(&ai))).await;

    let response = app
        .client
        .post(format!("{}/generate", app.address))
        .json(&json!({}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["message"], "URL or prompt is required");
}

#[tokio::test]
async fn test_generate_without_api_key_reports_configuration_error() {
    let app = TestApp::spawn(None).await;

    let response = app
        .client
        .post(format!("{}/generate", app.address))
        .json(&json!({ "prompt": "A blog about pottery" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 500);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"]["code"], "CONFIGURATION_ERROR");
    assert_eq!(body["error"]["message"], "AI API key is not configured");
}

#[tokio::test]
async fn test_generate_prompt_only_recovers_fenced_json() {
    let ai = MockServer::start().await;
    mount_ai_response(&ai, AI_CONTENT).await;
    let app = TestApp::spawn(Some(ai_endpoint(&ai))).await;

    let response = app
        .client
        .post(format!("{}/generate", app.address))
        .json(&json!({ "prompt": "An online widget store" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    // Metadata fields are flattened to the top level.
    assert_eq!(body["title"], "Acme Widgets | Premium Widgets Online");
    assert_eq!(body["aiAnalysis"]["seoScore"], 72);
    // Without a URL there is no ground truth, so the model's fields stand.
    assert_eq!(body["ogImage"], "https://fabricated.example/og.png");
}

#[tokio::test]
async fn test_generate_with_url_pins_fields_and_appends_advisories() {
    let ai = MockServer::start().await;
    mount_ai_response(&ai, AI_CONTENT).await;
    let app = TestApp::spawn(Some(ai_endpoint(&ai))).await;

    let site = MockServer::start().await;
    mount_page(&site, PAGE_WITHOUT_ASSETS).await;

    let response = app
        .client
        .post(format!("{}/generate", app.address))
        .json(&json!({ "url": site.uri() }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();

    // Technical fields come from the live page, not the model.
    assert_eq!(body["canonicalUrl"], "https://acme.test/widgets");
    assert!(body.get("ogImage").is_none());
    // ogUrl falls back to the extracted canonical.
    assert_eq!(body["ogUrl"], "https://acme.test/widgets");

    // Previews follow the model's improved OG copy.
    assert_eq!(body["discordTitle"], "Premium Widgets by Acme");
    assert_eq!(body["slackTitle"], "Premium Widgets by Acme");
    assert!(body.get("discordImage").is_none());

    // The page lacks all three assets, so all three advisories are present.
    let fields: Vec<&str> = body["aiAnalysis"]["missingFields"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["ogImage", "twitterImage", "favicon"]);
    assert_eq!(
        body["aiAnalysis"]["missingFields"][0]["importance"],
        "critical"
    );
}

#[tokio::test]
async fn test_generate_degrades_when_extraction_fails() {
    let ai = MockServer::start().await;
    mount_ai_response(&ai, AI_CONTENT).await;
    let app = TestApp::spawn(Some(ai_endpoint(&ai))).await;

    let site = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&site)
        .await;

    // The page is down, but generation still succeeds from the bare prompt.
    let response = app
        .client
        .post(format!("{}/generate", app.address))
        .json(&json!({ "url": site.uri() }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["title"], "Acme Widgets | Premium Widgets Online");
    // No ground truth means no reconciliation: the model's fields stand.
    assert_eq!(body["canonicalUrl"], "https://fabricated.example/");
}

#[tokio::test]
async fn test_generate_unparseable_ai_output_maps_to_parse_error() {
    let ai = MockServer::start().await;
    mount_ai_response(&ai, "Sorry, I cannot help with that.").await;
    let app = TestApp::spawn(Some(ai_endpoint(&ai))).await;

    let response = app
        .client
        .post(format!("{}/generate", app.address))
        .json(&json!({ "prompt": "An online widget store" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 500);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"]["code"], "PARSE_ERROR");
}

#[tokio::test]
async fn test_generate_ai_error_maps_to_bad_gateway() {
    let ai = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&ai)
        .await;
    let app = TestApp::spawn(Some(ai_endpoint(&ai))).await;

    let response = app
        .client
        .post(format!("{}/generate", app.address))
        .json(&json!({ "prompt": "An online widget store" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 502);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"]["code"], "EXTERNAL_SERVICE_ERROR");
}
