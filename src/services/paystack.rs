use crate::error::RelayError;
use anyhow::Result;
use serde_json::{json, Value};
use std::time::Duration;

/// Paystack charges are denominated in the currency's smallest unit.
const CURRENCY: &str = "KES";
const COUNTRY_PREFIX: &str = "+254";
const COUNTRY_CODE: &str = "254";
const MOBILE_MONEY_PROVIDER: &str = "mpesa";

/// Paystack requires an email on every charge; mobile-money clients often
/// have none, so fall back to a placeholder.
const DEFAULT_EMAIL: &str = "customer@example.com";

const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(30);

/// Outcome of a successful charge initiation.
#[derive(Debug)]
pub struct ChargeOutcome {
    pub reference: String,
    pub status: String,
    pub message: Option<String>,
    pub data: Option<Value>,
}

/// Client for the Paystack charge and verify endpoints.
pub struct PaystackClient {
    client: reqwest::Client,
    base_url: String,
    secret_key: String,
}

impl PaystackClient {
    pub fn new(base_url: &str, secret_key: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(UPSTREAM_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            secret_key: secret_key.to_string(),
        })
    }

    /// Initiate a mobile-money charge via `POST /charge`.
    ///
    /// The phone is normalized and the amount converted to minor units
    /// before the call; the gateway response's `message` and `data` are
    /// passed back for the relay to echo.
    pub async fn charge(
        &self,
        phone: &str,
        amount: f64,
        email: Option<&str>,
    ) -> Result<ChargeOutcome, RelayError> {
        let payload = json!({
            "amount": to_minor_units(amount),
            "currency": CURRENCY,
            "email": email.unwrap_or(DEFAULT_EMAIL),
            "mobile_money": {
                "phone": normalize_phone(phone),
                "provider": MOBILE_MONEY_PROVIDER,
            },
        });

        let response = self
            .client
            .post(format!("{}/charge", self.base_url))
            .bearer_auth(&self.secret_key)
            .json(&payload)
            .send()
            .await
            .map_err(|err| RelayError::pay_failed(Value::String(err.to_string())))?;

        if !response.status().is_success() {
            return Err(RelayError::pay_failed(error_details(response).await));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|err| RelayError::pay_failed(Value::String(err.to_string())))?;

        let data = body.get("data");
        let Some(reference) = data
            .and_then(|d| d.get("reference"))
            .and_then(Value::as_str)
        else {
            return Err(RelayError::pay_failed(Value::String(
                "gateway response missing transaction reference".to_string(),
            )));
        };

        Ok(ChargeOutcome {
            reference: reference.to_string(),
            status: data
                .and_then(|d| d.get("status"))
                .and_then(Value::as_str)
                .unwrap_or("pending")
                .to_string(),
            message: body
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string),
            data: data.cloned(),
        })
    }

    /// Look up a transaction via `GET /transaction/verify/{reference}` and
    /// return the gateway's `data` object.
    pub async fn verify(&self, reference: &str) -> Result<Value, RelayError> {
        let response = self
            .client
            .get(format!("{}/transaction/verify/{}", self.base_url, reference))
            .bearer_auth(&self.secret_key)
            .send()
            .await
            .map_err(|err| RelayError::verify_failed(Value::String(err.to_string())))?;

        if !response.status().is_success() {
            return Err(RelayError::verify_failed(error_details(response).await));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|err| RelayError::verify_failed(Value::String(err.to_string())))?;

        Ok(body.get("data").cloned().unwrap_or(Value::Null))
    }
}

/// Echo the gateway's error body verbatim when it parses as JSON, else the
/// raw text.
async fn error_details(response: reqwest::Response) -> Value {
    let text = response.text().await.unwrap_or_default();
    serde_json::from_str(&text).unwrap_or(Value::String(text))
}

/// Best-effort E.164 formatting for Kenyan numbers.
///
/// `07XXXXXXXX` gets its leading zero swapped for `+254`; bare national or
/// country-code digits get the prefix prepended; anything already starting
/// with `+` passes through. No numbering-plan validation: malformed input
/// yields malformed output rather than an error.
pub fn normalize_phone(phone: &str) -> String {
    let phone = phone.trim();

    if let Some(rest) = phone.strip_prefix('0') {
        format!("{COUNTRY_PREFIX}{rest}")
    } else if !phone.starts_with('+') {
        if phone.starts_with(COUNTRY_CODE) {
            format!("+{phone}")
        } else {
            format!("{COUNTRY_PREFIX}{phone}")
        }
    } else {
        phone.to_string()
    }
}

/// Convert a decimal amount to the currency's smallest unit, rounding
/// half-away-from-zero.
pub fn to_minor_units(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_leading_zero() {
        assert_eq!(normalize_phone("0712345678"), "+254712345678");
    }

    #[test]
    fn normalizes_bare_country_code() {
        assert_eq!(normalize_phone("254712345678"), "+254712345678");
    }

    #[test]
    fn leaves_international_format_unchanged() {
        assert_eq!(normalize_phone("+254712345678"), "+254712345678");
    }

    #[test]
    fn prefixes_bare_national_number() {
        assert_eq!(normalize_phone("712345678"), "+254712345678");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(normalize_phone("  0712345678 "), "+254712345678");
    }

    #[test]
    fn converts_whole_amounts() {
        assert_eq!(to_minor_units(100.0), 10_000);
    }

    #[test]
    fn converts_fractional_amounts() {
        assert_eq!(to_minor_units(99.5), 9_950);
    }

    #[test]
    fn rounds_sub_cent_amounts() {
        assert_eq!(to_minor_units(0.004), 0);
        assert_eq!(to_minor_units(0.006), 1);
    }
}
