use crate::{
    error::RelayError,
    handlers::AppState,
    models::{CheckResponse, ReferenceQuery},
};
use axum::{
    extract::{Query, State},
    Json,
};

/// `GET /check?reference=`: last known status, straight from the store.
///
/// Never calls the gateway and never mutates; an unknown reference is a
/// normal `found: false`, not an error.
pub async fn check_status(
    State(state): State<AppState>,
    Query(query): Query<ReferenceQuery>,
) -> Result<Json<CheckResponse>, RelayError> {
    let Some(reference) = query.reference.filter(|reference| !reference.is_empty()) else {
        return Err(RelayError::Validation("reference required"));
    };

    let record = state.store.get(&reference).await;

    Ok(Json(CheckResponse {
        found: record.is_some(),
        record,
    }))
}
