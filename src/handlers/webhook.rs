use crate::{error::RelayError, handlers::AppState, models::WebhookEvent, services};
use axum::{
    body::Bytes,
    extract::State,
    http::HeaderMap,
    Json,
};
use serde_json::{json, Value};

const SIGNATURE_HEADER: &str = "x-paystack-signature";

/// `POST /webhook`: asynchronous status notifications from the gateway.
///
/// The signature is verified over the raw body bytes before any parsing;
/// an unsigned or mis-signed event is dropped without touching the store.
/// Once authenticated, an event that names a reference upserts that
/// record's status (default `unknown`), and the gateway always gets a 200
/// acknowledgement so it stops redelivering.
pub async fn receive_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Value>, RelayError> {
    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    if !services::verify_signature(&state.webhook_secret, &body, signature) {
        return Err(RelayError::InvalidSignature);
    }

    let event: WebhookEvent = serde_json::from_slice(&body).unwrap_or_default();

    if let Some(data) = event.data.as_ref() {
        if let Some(reference) = data.reference.as_deref() {
            let status = data.status.as_deref().unwrap_or("unknown");
            state.store.upsert_status(reference, status).await;

            tracing::info!(
                reference = %reference,
                status = %status,
                event = event.event.as_deref().unwrap_or("unknown"),
                "webhook processed"
            );
        }
    }

    Ok(Json(json!({ "status": "ok" })))
}
