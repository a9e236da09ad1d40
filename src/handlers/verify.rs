use crate::{
    error::RelayError,
    handlers::AppState,
    models::{ReferenceQuery, VerifyResponse},
};
use axum::{
    extract::{Query, State},
    Json,
};
use serde_json::Value;

/// `GET /verify?reference=`: re-check a charge against the gateway.
///
/// The recorded status is upserted from the gateway's answer, creating a
/// bare record if the reference was never seen here (the webhook may have
/// been lost, or the charge initiated elsewhere).
pub async fn verify_charge(
    State(state): State<AppState>,
    Query(query): Query<ReferenceQuery>,
) -> Result<Json<VerifyResponse>, RelayError> {
    let Some(reference) = query.reference.filter(|reference| !reference.is_empty()) else {
        return Err(RelayError::Validation("reference required"));
    };

    let data = state.paystack.verify(&reference).await?;

    let status = data
        .get("status")
        .and_then(Value::as_str)
        .unwrap_or("unknown");
    state.store.upsert_status(&reference, status).await;

    tracing::info!(reference = %reference, status = %status, "charge verified");

    Ok(Json(VerifyResponse { ok: true, data }))
}
