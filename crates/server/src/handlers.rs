use super::{errors::AppError, state::AppState};
use axum::{extract::State, Json};
use metalens::{
    fetch_metadata, parse_ai_payload, prompts::build_prompt, reconcile, GeneratedMetadata,
    MetadataResult,
};
use serde_json::Value;
use tracing::{error, info};

// --- Route Handlers ---

pub async fn root() -> &'static str {
    "metalens server is running."
}

pub async fn health_check() -> &'static str {
    "OK"
}

/// The handler for `POST /metadata`.
///
/// Validates that the payload carries a string `url`, then runs the full
/// extraction pipeline. Extraction failure is fatal to this request.
pub async fn metadata_handler(
    Json(payload): Json<Value>,
) -> Result<Json<MetadataResult>, AppError> {
    let url = payload
        .get("url")
        .and_then(Value::as_str)
        .ok_or_else(|| AppError::Validation("URL is required".to_string()))?;

    info!("Fetching metadata for URL: {url}");
    let metadata = fetch_metadata(url).await?;
    info!("Metadata fetched successfully for URL: {url}");

    Ok(Json(metadata))
}

/// The handler for `POST /generate`.
///
/// Accepts a `url`, a free-text `prompt`, or both (at least one required).
/// When a `url` is given its extraction seeds the prompt and grounds the
/// reconciliation step; if that extraction fails, generation degrades to the
/// prompt-only path instead of failing the request.
pub async fn generate_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<GeneratedMetadata>, AppError> {
    let url = payload.get("url").and_then(Value::as_str);
    let prompt = payload.get("prompt").and_then(Value::as_str);

    if url.is_none() && prompt.is_none() {
        return Err(AppError::Validation("URL or prompt is required".to_string()));
    }

    // Checked before any outbound work.
    let ai_provider = app_state
        .ai_provider
        .as_ref()
        .ok_or_else(|| AppError::Configuration("AI API key is not configured".to_string()))?
        .clone();

    let existing = match url {
        Some(url) => match fetch_metadata(url).await {
            Ok(metadata) => Some(metadata),
            Err(e) => {
                error!("Error fetching existing metadata for {url}: {e}");
                None
            }
        },
        None => None,
    };

    let full_prompt = build_prompt(existing.as_ref(), prompt);
    info!(
        "Requesting metadata generation (url: {:?}, prompt given: {})",
        url,
        prompt.is_some()
    );
    let raw_response = ai_provider.generate(&full_prompt).await?;

    let mut generated: GeneratedMetadata = parse_ai_payload(&raw_response)?.into();
    reconcile(&mut generated, existing.as_ref());

    Ok(Json(generated))
}
