//! `POST /api/humanize`

use std::time::Instant;

use axum::{body::Bytes, extract::State, Json};
use humanizer_core::{HumanizeMode, TransformationResult};
use humanizer_text_processing::StdRandom;
use serde_json::Value;
use tracing::Instrument;

use crate::{metrics, state::AppState, ServerError};

/// Validated request
#[derive(Debug)]
pub struct HumanizeRequest {
    pub text: String,
    pub mode: HumanizeMode,
}

/// Check the body in a fixed order: presence and type, length, blankness.
///
/// The body is parsed from raw bytes so a missing `Content-Type` header is
/// not an error. An unrecognized `mode` falls back to `default_mode`.
pub fn validate_request(
    body: &[u8],
    max_input_chars: usize,
    default_mode: HumanizeMode,
) -> Result<HumanizeRequest, ServerError> {
    let payload: Value = serde_json::from_slice(body)
        .map_err(|_| ServerError::InvalidRequest("Invalid JSON body".to_string()))?;

    let text = match payload.get("text") {
        Some(Value::String(text)) if !text.is_empty() => text,
        _ => {
            return Err(ServerError::Validation(
                "Text is required and must be a string".to_string(),
            ))
        },
    };

    if text.chars().count() > max_input_chars {
        return Err(ServerError::Validation(format!(
            "Text must be less than {} characters",
            max_input_chars
        )));
    }

    if is_blank(text) {
        return Err(ServerError::Validation("Text cannot be empty".to_string()));
    }

    let mode = match payload.get("mode") {
        None | Some(Value::Null) => default_mode,
        Some(Value::String(raw)) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!(mode = %raw, fallback = %default_mode, "Unknown mode");
            default_mode
        }),
        Some(other) => {
            tracing::warn!(mode = %other, fallback = %default_mode, "Non-string mode");
            default_mode
        },
    };

    Ok(HumanizeRequest {
        text: text.clone(),
        mode,
    })
}

/// Nothing but whitespace and byte-order marks
fn is_blank(text: &str) -> bool {
    text.chars().all(|c| c.is_whitespace() || c == '\u{FEFF}')
}

/// Humanize handler
pub async fn humanize(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<TransformationResult>, ServerError> {
    let request_id = uuid::Uuid::new_v4();
    let span = tracing::info_span!("humanize", %request_id);

    let result = process(&state, &body).instrument(span).await;
    match &result {
        Ok(_) => metrics::record_request("ok"),
        Err(err) => {
            metrics::record_request("error");
            metrics::record_error(err.kind());
        },
    }
    result.map(Json)
}

async fn process(state: &AppState, body: &[u8]) -> Result<TransformationResult, ServerError> {
    let humanizer = &state.settings.humanizer;
    let request = validate_request(body, humanizer.max_input_chars, humanizer.default_mode)
        .map_err(|err| {
            tracing::debug!(error = %err, "Rejected request");
            err
        })?;

    let started = Instant::now();
    let humanized = {
        let mut rng = StdRandom::from_entropy();
        state.pipeline.humanize(&request.text, request.mode, &mut rng)
    };
    metrics::record_rewrite(&humanized, started.elapsed());

    let processing_time_ms = state.latency.simulate_processing().await;

    tracing::info!(
        mode = %request.mode,
        chars = request.text.chars().count(),
        rules = humanized.trace.rules_matched.len(),
        fillers = humanized.trace.fillers_injected,
        confidence = humanized.score.confidence,
        processing_time_ms,
        "Humanized text"
    );

    Ok(TransformationResult::new(
        &request.text,
        humanized.text,
        &humanized.score,
        processing_time_ms,
    ))
}
