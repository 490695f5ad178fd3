//! Prometheus metrics
//!
//! Recording goes through the `metrics` facade; without an installed
//! recorder every call is a no-op, so handlers record unconditionally.

use std::time::Duration;

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use humanizer_text_processing::Humanized;
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};

use crate::state::AppState;

pub const REQUESTS_TOTAL: &str = "humanizer_requests_total";
pub const ERRORS_TOTAL: &str = "humanizer_errors_total";
pub const RULES_APPLIED_TOTAL: &str = "humanizer_rules_applied_total";
pub const FILLERS_INJECTED_TOTAL: &str = "humanizer_fillers_injected_total";
pub const CONFIDENCE: &str = "humanizer_confidence";
pub const REWRITE_DURATION_MS: &str = "humanizer_rewrite_duration_ms";

/// Install the global Prometheus recorder
pub fn init_metrics() -> Result<PrometheusHandle, BuildError> {
    let handle = PrometheusBuilder::new().install_recorder()?;

    metrics::describe_counter!(REQUESTS_TOTAL, "Humanize requests by outcome");
    metrics::describe_counter!(ERRORS_TOTAL, "Failed humanize requests by kind");
    metrics::describe_counter!(RULES_APPLIED_TOTAL, "Substitution rules that changed the text");
    metrics::describe_counter!(FILLERS_INJECTED_TOTAL, "Conversational fillers prepended");
    metrics::describe_histogram!(CONFIDENCE, "Confidence score of successful rewrites");
    metrics::describe_histogram!(REWRITE_DURATION_MS, "Time spent in the rewrite pipeline");

    Ok(handle)
}

pub fn record_request(status: &'static str) {
    metrics::counter!(REQUESTS_TOTAL, "status" => status).increment(1);
}

pub fn record_error(kind: &'static str) {
    metrics::counter!(ERRORS_TOTAL, "kind" => kind).increment(1);
}

/// Record a finished rewrite, excluding the simulated delay
pub fn record_rewrite(result: &Humanized, elapsed: Duration) {
    metrics::counter!(RULES_APPLIED_TOTAL).increment(result.trace.rules_matched.len() as u64);
    metrics::counter!(FILLERS_INJECTED_TOTAL).increment(result.trace.fillers_injected as u64);
    metrics::histogram!(CONFIDENCE).record(result.score.confidence as f64);
    metrics::histogram!(REWRITE_DURATION_MS).record(elapsed.as_secs_f64() * 1000.0);
}

/// `GET /metrics`
pub async fn metrics_handler(State(state): State<AppState>) -> impl IntoResponse {
    match &state.metrics {
        Some(handle) => (StatusCode::OK, handle.render()),
        None => (
            StatusCode::SERVICE_UNAVAILABLE,
            "metrics recorder not installed\n".to_string(),
        ),
    }
}
