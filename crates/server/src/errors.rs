use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use metalens::MetadataError;
use serde_json::json;
use tracing::error;

/// A custom error type for the server application.
///
/// This enum encapsulates the different kinds of errors that can occur within
/// the server, allowing them to be converted into the uniform
/// `{"error": {"message", "code"}}` envelope the UI renders.
pub enum AppError {
    /// Bad caller input, rejected before any I/O.
    Validation(String),
    /// A required operational setting is missing.
    Configuration(String),
    /// Errors originating from the `metalens` core pipelines.
    Metadata(MetadataError),
    /// Generic internal server errors.
    Internal(anyhow::Error),
}

impl From<MetadataError> for AppError {
    fn from(err: MetadataError) -> Self {
        AppError::Metadata(err)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, code, message) = match self {
            AppError::Validation(message) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", message),
            AppError::Configuration(message) => {
                error!("Configuration error: {message}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "CONFIGURATION_ERROR",
                    message,
                )
            }
            AppError::Metadata(err) => {
                // Log the original error for debugging purposes
                error!("MetadataError: {:?}", err);
                match err {
                    MetadataError::Fetch(_) | MetadataError::FetchStatus { .. } => (
                        StatusCode::BAD_GATEWAY,
                        "EXTERNAL_SERVICE_ERROR",
                        err.to_string(),
                    ),
                    MetadataError::AiRequest(_)
                    | MetadataError::AiDeserialization(_)
                    | MetadataError::AiApi(_)
                    | MetadataError::NoAiResponse => (
                        StatusCode::BAD_GATEWAY,
                        "EXTERNAL_SERVICE_ERROR",
                        err.to_string(),
                    ),
                    MetadataError::InvalidAiJson(_) => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "PARSE_ERROR",
                        "Failed to parse AI response. The AI may have returned invalid JSON."
                            .to_string(),
                    ),
                    MetadataError::InvalidUrl(_) => (
                        StatusCode::BAD_REQUEST,
                        "VALIDATION_ERROR",
                        err.to_string(),
                    ),
                    MetadataError::ReqwestClientBuild(_)
                    | MetadataError::Regex(_)
                    | MetadataError::JsonSerialization(_) => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        err.to_string(),
                    ),
                }
            }
            AppError::Internal(err) => {
                error!("Internal server error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An unexpected error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "message": message,
                "code": code,
            }
        }));

        (status_code, body).into_response()
    }
}
