use hmac::{Hmac, Mac};
use sha2::Sha512;

type HmacSha512 = Hmac<Sha512>;

/// Check a webhook signature header against the raw request body.
///
/// Paystack signs the exact bytes it sends as lowercase-hex HMAC-SHA512
/// under the shared secret, so verification must run over the body as
/// received, before any JSON parsing. The comparison is constant-time via
/// `Mac::verify_slice`.
pub fn verify_signature(secret: &str, body: &[u8], signature: &str) -> bool {
    let Ok(expected) = hex::decode(signature.trim()) else {
        return false;
    };

    let Ok(mut mac) = HmacSha512::new_from_slice(secret.as_bytes()) else {
        return false;
    };
    mac.update(body);
    mac.verify_slice(&expected).is_ok()
}

/// Produce the lowercase-hex HMAC-SHA512 signature for a body. Counterpart
/// of [`verify_signature`], used when acting as the sender.
pub fn sign_body(secret: &str, body: &[u8]) -> String {
    let mut mac =
        HmacSha512::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key length");
    mac.update(body);
    hex::encode(mac.finalize().into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "sk_test_secret";

    #[test]
    fn accepts_matching_signature() {
        let body = br#"{"event":"charge.success","data":{"reference":"R1"}}"#;
        let signature = sign_body(SECRET, body);
        assert!(verify_signature(SECRET, body, &signature));
    }

    #[test]
    fn rejects_wrong_secret() {
        let body = br#"{"event":"charge.success"}"#;
        let signature = sign_body("sk_other_secret", body);
        assert!(!verify_signature(SECRET, body, &signature));
    }

    #[test]
    fn rejects_tampered_body() {
        let signature = sign_body(SECRET, br#"{"amount":100}"#);
        assert!(!verify_signature(SECRET, br#"{"amount":999}"#, &signature));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert!(!verify_signature(SECRET, b"{}", "not-hex-at-all"));
        assert!(!verify_signature(SECRET, b"{}", ""));
    }
}
