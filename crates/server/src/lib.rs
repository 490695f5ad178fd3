//! Humanizer Server
//!
//! HTTP front end for the text humanizer: request validation, the rewrite
//! pipeline, simulated latency and response assembly.

pub mod http;
pub mod humanize;
pub mod latency;
pub mod metrics;
pub mod state;

pub use http::{create_router, with_middleware};
pub use latency::LatencySimulator;
pub use crate::metrics::{init_metrics, record_error, record_request, record_rewrite};
pub use state::AppState;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Server errors
#[derive(Error, Debug)]
pub enum ServerError {
    /// Request body failed a precondition; the message goes to the client verbatim
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    InvalidRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ServerError {
    /// Label used for the `status` dimension of request metrics
    pub fn kind(&self) -> &'static str {
        match self {
            ServerError::Validation(_) => "validation_error",
            ServerError::InvalidRequest(_) => "invalid_request",
            ServerError::Internal(_) => "internal_error",
        }
    }
}

impl From<&ServerError> for StatusCode {
    fn from(err: &ServerError) -> Self {
        match err {
            ServerError::Validation(_) => StatusCode::BAD_REQUEST,
            ServerError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ServerError> for StatusCode {
    fn from(err: ServerError) -> Self {
        StatusCode::from(&err)
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = StatusCode::from(&self);
        let message = match &self {
            ServerError::Internal(detail) => {
                tracing::error!(error = %detail, "Request failed");
                "Internal server error".to_string()
            },
            other => other.to_string(),
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
