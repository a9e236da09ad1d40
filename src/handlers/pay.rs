use crate::{
    error::RelayError,
    handlers::AppState,
    models::{ChargeRequest, ChargeResponse, PaymentRecord},
};
use axum::{extract::State, Json};
use serde_json::Value;

/// `POST /pay`: initiate a mobile-money charge.
///
/// Validation happens before any upstream call: a request missing phone or
/// amount never reaches the gateway. On success the gateway reference is
/// recorded with its initial status (default `pending`) and a creation
/// timestamp, overwriting any earlier record for the same reference.
pub async fn initiate_charge(
    State(state): State<AppState>,
    Json(request): Json<ChargeRequest>,
) -> Result<Json<ChargeResponse>, RelayError> {
    let phone = request
        .phone
        .as_deref()
        .map(str::trim)
        .filter(|phone| !phone.is_empty());
    let amount = request.amount.as_ref().and_then(parse_amount);

    let (Some(phone), Some(amount)) = (phone, amount) else {
        return Err(RelayError::Validation("phone and amount required"));
    };

    let outcome = state
        .paystack
        .charge(phone, amount, request.email.as_deref())
        .await?;

    state
        .store
        .put(&outcome.reference, PaymentRecord::initiated(&outcome.status))
        .await;

    tracing::info!(
        reference = %outcome.reference,
        status = %outcome.status,
        "charge initiated"
    );

    Ok(Json(ChargeResponse {
        ok: true,
        message: outcome.message,
        data: outcome.data,
    }))
}

/// Clients send the amount as a JSON number or a numeric string.
fn parse_amount(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}
