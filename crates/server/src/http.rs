//! HTTP Endpoints
//!
//! REST API for the humanizer.

use std::any::Any;
use std::time::Duration;

use axum::{
    extract::State,
    http::{HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use humanizer_config::{constants::server::FALLBACK_CORS_ORIGIN, ServerConfig};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{self, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::humanize::humanize;
use crate::metrics::{self, metrics_handler};
use crate::state::AppState;
use crate::ServerError;

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let server = state.settings.server.clone();

    let router = Router::new()
        .route("/api/humanize", post(humanize))
        // Health check
        .route("/health", get(health_check))
        // Prometheus metrics
        .route("/metrics", get(metrics_handler))
        .with_state(state);

    with_middleware(router, &server)
}

/// Wrap routes in the shared middleware stack
///
/// Panics become 500 `{"error": "Internal server error"}` responses.
pub fn with_middleware(router: Router, server: &ServerConfig) -> Router {
    let cors_layer = build_cors_layer(&server.cors_origins, server.cors_enabled);
    let timeout = Duration::from_secs(server.timeout_seconds);

    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TimeoutLayer::new(timeout))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(msg) = err.downcast_ref::<String>() {
        msg.clone()
    } else if let Some(msg) = err.downcast_ref::<&str>() {
        msg.to_string()
    } else {
        "handler panicked".to_string()
    };

    metrics::record_request("error");
    metrics::record_error("panic");
    ServerError::Internal(detail).into_response()
}

/// Build CORS layer from configured origins
///
/// - If cors_enabled is false, returns permissive layer (for dev)
/// - If cors_origins is empty, defaults to localhost:3000
/// - Otherwise, uses the configured origins
fn build_cors_layer(origins: &[String], enabled: bool) -> CorsLayer {
    if !enabled {
        tracing::warn!("CORS is disabled - allowing all origins (NOT FOR PRODUCTION)");
        return CorsLayer::permissive();
    }

    let parsed_origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| {
            origin.parse::<HeaderValue>().ok().or_else(|| {
                tracing::warn!("Invalid CORS origin: {}", origin);
                None
            })
        })
        .collect();

    let allowed = if parsed_origins.is_empty() {
        if !origins.is_empty() {
            tracing::error!("All configured CORS origins are invalid, falling back to localhost");
        } else {
            tracing::info!("No CORS origins configured, defaulting to {}", FALLBACK_CORS_ORIGIN);
        }
        vec![HeaderValue::from_static(FALLBACK_CORS_ORIGIN)]
    } else {
        tracing::info!("CORS configured with {} origins", parsed_origins.len());
        parsed_origins
    };

    CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(cors::Any)
}

/// Health check: the rule catalog must be loaded
async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<serde_json::Value>) {
    let rule_count = state.pipeline.catalog().len();
    let healthy = rule_count > 0;

    let status_code = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status_code,
        Json(serde_json::json!({
            "status": if healthy { "healthy" } else { "degraded" },
            "version": env!("CARGO_PKG_VERSION"),
            "checks": {
                "rules": {
                    "status": if healthy { "ok" } else { "empty" },
                    "count": rule_count
                },
                "latency": {
                    "enabled": state.latency.is_enabled()
                }
            }
        })),
    )
}
