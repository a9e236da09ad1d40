use crate::models::PaymentRecord;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// Success body of `POST /pay`, echoing the gateway's `message` and `data`.
#[derive(Serialize, Debug)]
pub struct ChargeResponse {
    pub ok: bool,
    pub message: Option<String>,
    pub data: Option<Value>,
}

/// Success body of `GET /verify`.
#[derive(Serialize, Debug)]
pub struct VerifyResponse {
    pub ok: bool,
    pub data: Value,
}

/// Body of `GET /check`.
#[derive(Serialize, Debug)]
pub struct CheckResponse {
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<PaymentRecord>,
}

#[derive(Serialize, Debug)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub records: usize,
    pub timestamp: DateTime<Utc>,
}
