use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("{0}")]
    Validation(&'static str),

    #[error("{code}")]
    Upstream { code: &'static str, details: Value },

    #[error("invalid webhook signature")]
    InvalidSignature,
}

impl RelayError {
    pub fn pay_failed(details: Value) -> Self {
        Self::Upstream {
            code: "pay_failed",
            details,
        }
    }

    pub fn verify_failed(details: Value) -> Self {
        Self::Upstream {
            code: "verify_failed",
            details,
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        match self {
            RelayError::Validation(message) => {
                tracing::warn!(error = message, "request rejected");
                (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
            }
            RelayError::Upstream { code, details } => {
                tracing::error!(error = code, %details, "upstream call failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": code, "details": details })),
                )
                    .into_response()
            }
            RelayError::InvalidSignature => {
                tracing::warn!("webhook rejected: signature mismatch");
                (StatusCode::BAD_REQUEST, "Invalid signature").into_response()
            }
        }
    }
}
