pub mod check;
pub mod health;
pub mod pay;
pub mod verify;
pub mod webhook;

pub use check::*;
pub use health::*;
pub use pay::*;
pub use verify::*;
pub use webhook::*;

use crate::services::{PaystackClient, RecordStore};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
    pub paystack: Arc<PaystackClient>,
    /// Shared secret the gateway uses to sign webhook payloads; the same
    /// key that authenticates outbound calls.
    pub webhook_secret: String,
}

/// Assemble the relay's routes. Global layers (tracing, CORS) are applied
/// by the caller.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/pay", post(initiate_charge))
        .route("/verify", get(verify_charge))
        .route("/webhook", post(receive_webhook))
        .route("/check", get(check_status))
        .route("/health", get(health_check))
        .with_state(state)
}
