//! PayMongo webhook signature verification.
//!
//! The signature is the hex HMAC-SHA256 of the raw request body keyed with the
//! shared secret. Verification runs on the unparsed bytes.

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use super::errors::WebhookError;

/// Header carrying the delivery signature.
pub const SIGNATURE_HEADER: &str = "X-PayMongo-Signature";

/// Verifier for inbound webhook signatures.
#[derive(Clone)]
pub struct WebhookVerifier {
    secret: SecretString,
}

impl WebhookVerifier {
    /// Creates a new verifier with the given signing secret.
    pub fn new(secret: SecretString) -> Self {
        Self { secret }
    }

    /// Checks `signature` against the HMAC of `payload`.
    ///
    /// Hex case is ignored. A header that is not hex is treated the same as
    /// a mismatch.
    ///
    /// # Errors
    ///
    /// - `MissingSignature` - no header was sent
    /// - `InvalidSignature` - header is not hex or does not match
    pub fn verify(&self, payload: &[u8], signature: Option<&str>) -> Result<(), WebhookError> {
        let signature = signature
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(WebhookError::MissingSignature)?;

        let provided = hex::decode(signature).map_err(|_| WebhookError::InvalidSignature)?;
        let expected = self.compute(payload);

        if !constant_time_compare(&expected, &provided) {
            return Err(WebhookError::InvalidSignature);
        }
        Ok(())
    }

    /// Hex signature for `payload`, as the gateway would send it.
    pub fn sign(&self, payload: &[u8]) -> String {
        hex::encode(self.compute(payload))
    }

    fn compute(&self, payload: &[u8]) -> Vec<u8> {
        let mut mac = Hmac::<Sha256>::new_from_slice(self.secret.expose_secret().as_bytes())
            .expect("HMAC accepts any key");
        mac.update(payload);
        mac.finalize().into_bytes().to_vec()
    }
}

impl std::fmt::Debug for WebhookVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebhookVerifier").finish_non_exhaustive()
    }
}

/// Performs constant-time comparison of two byte slices.
fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const TEST_SECRET: &str = "sk_test_webhook_secret_12345";

    fn verifier() -> WebhookVerifier {
        WebhookVerifier::new(SecretString::new(TEST_SECRET.to_string()))
    }

    // ══════════════════════════════════════════════════════════════
    // Signature Verification Tests
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn valid_signature_is_accepted() {
        let payload = br#"{"data":{"attributes":{"type":"payment.paid"}}}"#;
        let v = verifier();
        let signature = v.sign(payload);

        assert!(v.verify(payload, Some(&signature)).is_ok());
    }

    #[test]
    fn known_vector_matches() {
        // HMAC-SHA256(key="key", "The quick brown fox jumps over the lazy dog")
        let v = WebhookVerifier::new(SecretString::new("key".to_string()));
        assert_eq!(
            v.sign(b"The quick brown fox jumps over the lazy dog"),
            "f7bc83f430538424b13298e6aa6fb143ef4d59a14946175997479dbc2d1a3cd8"
        );
    }

    #[test]
    fn uppercase_hex_is_accepted() {
        let payload = b"{}";
        let v = verifier();
        let signature = v.sign(payload).to_uppercase();

        assert!(v.verify(payload, Some(&signature)).is_ok());
    }

    #[test]
    fn missing_header_is_rejected() {
        assert_eq!(
            verifier().verify(b"{}", None),
            Err(WebhookError::MissingSignature)
        );
    }

    #[test]
    fn empty_header_is_rejected() {
        assert_eq!(
            verifier().verify(b"{}", Some("  ")),
            Err(WebhookError::MissingSignature)
        );
    }

    #[test]
    fn non_hex_header_is_rejected() {
        assert_eq!(
            verifier().verify(b"{}", Some("not-hex-at-all")),
            Err(WebhookError::InvalidSignature)
        );
    }

    #[test]
    fn truncated_signature_is_rejected() {
        let v = verifier();
        let signature = v.sign(b"{}");

        assert_eq!(
            v.verify(b"{}", Some(&signature[..32])),
            Err(WebhookError::InvalidSignature)
        );
    }

    #[test]
    fn signature_from_other_secret_is_rejected() {
        let other = WebhookVerifier::new(SecretString::new("other".to_string()));
        let signature = other.sign(b"{}");

        assert_eq!(
            verifier().verify(b"{}", Some(&signature)),
            Err(WebhookError::InvalidSignature)
        );
    }

    #[test]
    fn debug_does_not_leak_secret() {
        let rendered = format!("{:?}", verifier());
        assert!(!rendered.contains(TEST_SECRET));
    }

    // ══════════════════════════════════════════════════════════════
    // Tamper Property
    // ══════════════════════════════════════════════════════════════

    proptest! {
        #[test]
        fn any_single_byte_change_is_rejected(
            body in proptest::collection::vec(any::<u8>(), 1..256),
            index in any::<prop::sample::Index>(),
            flip in 1u8..=255,
        ) {
            let v = verifier();
            let signature = v.sign(&body);
            prop_assert!(v.verify(&body, Some(&signature)).is_ok());

            let mut tampered = body.clone();
            let i = index.index(tampered.len());
            tampered[i] ^= flip;

            prop_assert_eq!(
                v.verify(&tampered, Some(&signature)),
                Err(WebhookError::InvalidSignature)
            );
        }
    }
}
