pub mod gemini;
pub mod local;

use crate::errors::MetadataError;
use async_trait::async_trait;
use dyn_clone::DynClone;
use std::fmt::Debug;

/// A trait for interacting with an AI provider.
///
/// This defines a common interface for sending a fully built prompt to
/// different Large Language Models (e.g., Gemini, local OpenAI-compatible
/// servers) and getting the raw text response back.
#[async_trait]
pub trait AiProvider: Send + Sync + Debug + DynClone {
    /// Sends the prompt and returns the model's raw text response.
    ///
    /// An empty response is an error ([`MetadataError::NoAiResponse`]), not
    /// an empty string.
    async fn generate(&self, prompt: &str) -> Result<String, MetadataError>;
}

dyn_clone::clone_trait_object!(AiProvider);
