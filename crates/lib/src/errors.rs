use thiserror::Error;

/// Custom error types for the metadata pipelines.
#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("Failed to build Reqwest client: {0}")]
    ReqwestClientBuild(reqwest::Error),
    #[error("Failed to fetch URL: {0}")]
    Fetch(reqwest::Error),
    #[error("Failed to fetch URL: {status}")]
    FetchStatus { status: reqwest::StatusCode },
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("Failed to send request to AI provider: {0}")]
    AiRequest(reqwest::Error),
    #[error("Failed to deserialize AI provider response: {0}")]
    AiDeserialization(reqwest::Error),
    #[error("AI provider returned an error: {0}")]
    AiApi(String),
    #[error("No response from AI")]
    NoAiResponse,
    #[error("The AI returned invalid JSON: {0}")]
    InvalidAiJson(serde_json::Error),
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
    #[error("Failed to serialize result: {0}")]
    JsonSerialization(#[from] serde_json::Error),
}
