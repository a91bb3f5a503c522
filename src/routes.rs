use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use tracing::error;

use crate::languages::{self, SUPPORTED_LANGUAGES};
use crate::state::AppState;
use crate::translation::{RequestPacer, TranslationService};

pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/translate/all", post(translate_all))
        .route("/translate/specific", post(translate_specific))
        .route("/health", get(health_check))
}

type HandlerError = (StatusCode, Json<Value>);

fn bad_request(message: impl Into<String>) -> HandlerError {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": message.into() })),
    )
}

fn internal_error(err: anyhow::Error) -> HandlerError {
    error!("Unhandled relay error: {:#}", err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "error": "Internal server error",
            "message": err.to_string(),
        })),
    )
}

/// Pull the source text and cultural-context score out of the payload.
/// Fails fast, before any gateway call is made.
fn validate_common(payload: &Value) -> Result<(String, f64), HandlerError> {
    if let Some(context) = payload.get("cultural_context") {
        let in_range = context.as_f64().is_some_and(|c| (0.0..=1.0).contains(&c));
        if !in_range {
            return Err(bad_request("Cultural context must be between 0.0 and 1.0"));
        }
    }
    let cultural_context = payload
        .get("cultural_context")
        .and_then(|v| v.as_f64())
        .unwrap_or(0.5);

    let text = payload.get("text").and_then(|v| v.as_str()).unwrap_or("");
    if text.is_empty() {
        return Err(bad_request("Text is required"));
    }

    Ok((text.to_string(), cultural_context))
}

/// Validate the caller-supplied language list against the supported
/// set, enumerating every invalid entry.
fn validate_languages(payload: &Value) -> Result<Vec<String>, HandlerError> {
    let entries = payload
        .get("languages")
        .and_then(|v| v.as_array())
        .ok_or_else(|| bad_request("Languages array is required"))?;

    let requested: Vec<String> = entries
        .iter()
        .map(|v| match v.as_str() {
            Some(s) => s.to_string(),
            None => v.to_string(),
        })
        .collect();

    let invalid: Vec<&str> = requested
        .iter()
        .filter(|l| !languages::is_supported(l))
        .map(|l| l.as_str())
        .collect();
    if !invalid.is_empty() {
        return Err(bad_request(format!(
            "Invalid languages: {}. Supported languages are: {}",
            invalid.join(", "),
            SUPPORTED_LANGUAGES.join(", ")
        )));
    }

    Ok(requested)
}

#[derive(Debug, Serialize)]
struct TranslationResponse {
    translations: BTreeMap<String, String>,
}

/// Fan the text out across the target languages and shape the response
/// map, flattening per-language failures to "Error: <message>" entries.
async fn run_batch(
    state: &AppState,
    text: &str,
    target_languages: &[String],
    cultural_context: f64,
) -> anyhow::Result<Json<Value>> {
    let translator = TranslationService::new(
        state.completions.clone(),
        RequestPacer::from_millis(state.config.pacing_ms),
    );
    let results = translator
        .batch_translate(text, target_languages, cultural_context)
        .await;

    let mut translations = BTreeMap::new();
    for result in results {
        let entry = match result.outcome {
            Ok(translated) => translated,
            Err(err) => format!("Error: {}", err),
        };
        translations.insert(result.language, entry);
    }

    let body = serde_json::to_value(TranslationResponse { translations })?;
    Ok(Json(body))
}

async fn translate_all(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>, HandlerError> {
    let (text, cultural_context) = validate_common(&payload)?;
    let target_languages = languages::all_supported();

    run_batch(&state, &text, &target_languages, cultural_context)
        .await
        .map_err(internal_error)
}

async fn translate_specific(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>, HandlerError> {
    let (text, cultural_context) = validate_common(&payload)?;
    let target_languages = validate_languages(&payload)?;

    run_batch(&state, &text, &target_languages, cultural_context)
        .await
        .map_err(internal_error)
}

async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "OK",
        "message": "Translation service is running with OpenRouter",
        "model": state.config.model,
    }))
}
