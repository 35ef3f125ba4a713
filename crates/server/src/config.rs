//! # Application Configuration
//!
//! Configuration for the `metalens-server`, loaded from the process
//! environment (with `.env` support at startup). The AI API key is
//! deliberately optional here: a missing key is reported per `/generate`
//! request as a configuration error rather than preventing startup, so the
//! extraction endpoint stays available.

use config::{Config as ConfigBuilder, Environment};
use serde::Deserialize;
use std::env;

/// A custom error type for configuration issues.
#[derive(Debug)]
pub enum ConfigError {
    /// Indicates an error from the underlying `config` crate.
    General(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::General(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::General(err.to_string())
    }
}

/// The server configuration, mapped from environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// The port for the server to listen on. Loaded from `PORT`.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Which AI provider to use ("gemini" or "local"). Loaded from `AI_PROVIDER`.
    #[serde(default = "default_ai_provider")]
    pub ai_provider: String,
    /// Provider endpoint override. Loaded from `AI_API_URL`. For Gemini the
    /// URL is derived from the model name when unset; for the local provider
    /// it is required.
    #[serde(default)]
    pub ai_api_url: Option<String>,
    /// The provider API key. Loaded from `AI_API_KEY` (with `GEMINI_API_KEY`
    /// honored as a fallback).
    #[serde(default)]
    pub ai_api_key: Option<String>,
    /// The model name. Loaded from `AI_MODEL`.
    #[serde(default = "default_ai_model")]
    pub ai_model: String,
}

fn default_port() -> u16 {
    8080
}

fn default_ai_provider() -> String {
    "gemini".to_string()
}

fn default_ai_model() -> String {
    "gemini-2.5-flash".to_string()
}

/// Loads the application configuration from environment variables.
pub fn get_config() -> Result<AppConfig, ConfigError> {
    let settings = ConfigBuilder::builder()
        .add_source(Environment::default().try_parsing(true))
        .build()?;

    let mut config: AppConfig = settings.try_deserialize()?;

    // GEMINI_API_KEY is the conventional variable name for the default
    // provider; honor it when AI_API_KEY is not set.
    if config.ai_api_key.is_none() {
        if let Ok(key) = env::var("GEMINI_API_KEY") {
            if !key.is_empty() {
                config.ai_api_key = Some(key);
            }
        }
    }

    Ok(config)
}
