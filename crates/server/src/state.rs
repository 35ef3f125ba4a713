//! # Application State
//!
//! The shared application state (`AppState`) and the logic for building it
//! at startup. There is no database and no cache: the state is just the
//! configuration and the instantiated AI provider, shared immutably across
//! request handlers.

use crate::config::AppConfig;
use metalens::providers::ai::{gemini::GeminiProvider, local::LocalAiProvider, AiProvider};
use std::sync::Arc;
use tracing::warn;

/// The shared application state, accessible from all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The application's configuration.
    pub config: Arc<AppConfig>,
    /// The configured AI provider, or `None` when no API key is available.
    /// `/generate` reports the missing key as a configuration error per
    /// request; extraction stays fully functional either way.
    pub ai_provider: Option<Arc<dyn AiProvider>>,
}

/// Builds the shared application state from the configuration.
pub fn build_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    let ai_provider: Option<Arc<dyn AiProvider>> = match config.ai_provider.as_str() {
        "gemini" => match config.ai_api_key.clone() {
            Some(api_key) => {
                // If api_url is not provided, construct it from the model name.
                let api_url = config.ai_api_url.clone().unwrap_or_else(|| {
                    format!(
                        "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent",
                        config.ai_model
                    )
                });
                Some(Arc::new(GeminiProvider::new(api_url, api_key)?))
            }
            None => {
                warn!("AI API key is not set; /generate will report a configuration error");
                None
            }
        },
        "local" => {
            // For local providers, the URL is always required.
            let api_url = config.ai_api_url.clone().ok_or_else(|| {
                anyhow::anyhow!("AI_API_URL is required for the local provider")
            })?;
            Some(Arc::new(LocalAiProvider::new(
                api_url,
                config.ai_api_key.clone(),
                Some(config.ai_model.clone()),
            )?))
        }
        other => {
            return Err(anyhow::anyhow!("Unsupported AI provider: {other}"));
        }
    };

    Ok(AppState {
        config: Arc::new(config),
        ai_provider,
    })
}
