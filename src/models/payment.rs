use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Last known state of a charge attempt, keyed by the gateway reference.
///
/// `status` is an open string: the gateway may introduce values beyond
/// `pending`/`success`/`failed`, and we store whatever it sends. Records
/// created by a webhook or verify call before the charge was seen have no
/// `created_at`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PaymentRecord {
    pub status: String,

    #[serde(rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl PaymentRecord {
    /// Record for a freshly initiated charge.
    pub fn initiated(status: &str) -> Self {
        Self {
            status: status.to_string(),
            created_at: Some(Utc::now()),
        }
    }
}

/// Body of `POST /pay`. Fields are optional so missing ones surface as a
/// validation error rather than a deserialization failure; `amount` stays a
/// raw value because clients send it as either a number or a numeric string.
#[derive(Deserialize, Debug)]
pub struct ChargeRequest {
    pub phone: Option<String>,
    pub amount: Option<Value>,
    pub email: Option<String>,
}

/// Query string for `GET /verify` and `GET /check`.
#[derive(Deserialize, Debug)]
pub struct ReferenceQuery {
    pub reference: Option<String>,
}

/// Webhook event envelope. Only the fields the relay acts on are modeled;
/// everything else in the gateway payload is ignored.
#[derive(Deserialize, Debug, Default)]
pub struct WebhookEvent {
    #[serde(default)]
    pub event: Option<String>,
    #[serde(default)]
    pub data: Option<WebhookData>,
}

#[derive(Deserialize, Debug, Default)]
pub struct WebhookData {
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}
