//! # Common Test Utilities
//!
//! Shared harness for the `metalens-server` integration tests. `TestApp`
//! spawns the real Axum application on a random port, optionally wired to a
//! mock OpenAI-compatible endpoint for the generation tests.

#![allow(unused)]

use metalens_server::{config::AppConfig, router::create_router, state::build_app_state};
use reqwest::Client;
use tokio::net::TcpListener;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

/// A harness for end-to-end testing of the Axum server.
pub struct TestApp {
    pub address: String,
    pub client: Client,
}

impl TestApp {
    /// Spawns the application server and returns a `TestApp` instance.
    ///
    /// When `ai_api_url` is `Some`, the app is configured with the local
    /// OpenAI-compatible provider pointed at that URL. When `None`, the app
    /// runs with the default provider and no API key, so `/generate` reports
    /// a configuration error while `/metadata` stays functional.
    pub async fn spawn(ai_api_url: Option<String>) -> Self {
        let config = match ai_api_url {
            Some(api_url) => AppConfig {
                port: 0,
                ai_provider: "local".to_string(),
                ai_api_url: Some(api_url),
                ai_api_key: None,
                ai_model: "mock-chat-model".to_string(),
            },
            None => AppConfig {
                port: 0,
                ai_provider: "gemini".to_string(),
                ai_api_url: None,
                ai_api_key: None,
                ai_model: "gemini-2.5-flash".to_string(),
            },
        };

        let app_state = build_app_state(config).expect("failed to build app state");
        let app = create_router(app_state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind random port");
        let address = format!("http://{}", listener.local_addr().unwrap());

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            address,
            client: Client::new(),
        }
    }
}

/// Mounts a page body at `/` on the given mock server.
pub async fn mount_page(server: &MockServer, body: &str) {
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body.to_string()))
        .mount(server)
        .await;
}

/// Mounts an OpenAI-compatible chat completion returning `content` as the
/// assistant message.
pub async fn mount_ai_response(server: &MockServer, content: &str) {
    let body = serde_json::json!({
        "choices": [{
            "message": { "role": "assistant", "content": content }
        }]
    });
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// The endpoint path `TestApp::spawn` expects the AI mock to serve.
pub fn ai_endpoint(server: &MockServer) -> String {
    format!("{}/v1/chat/completions", server.uri())
}
