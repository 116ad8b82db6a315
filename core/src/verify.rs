//! Ed25519 signature verification for inbound webhook requests.
//!
//! The platform signs every delivery with its published Ed25519 key. The
//! signed message is the `X-Signature-Timestamp` header bytes followed
//! immediately by the raw request body, with no separator. Verification is
//! fail-closed: every ambiguity (missing header, undecodable hex, wrong
//! length, cryptographic mismatch) is a typed rejection, never pass-through.
//!
//! The verifying key is injected at construction so the verifier stays a pure
//! function over its inputs and can be exercised with synthetic keys in
//! tests.

use ed25519_dalek::{Signature, Verifier, VerifyingKey};
use thiserror::Error;

/// Length in bytes of an Ed25519 public key.
pub const PUBLIC_KEY_LEN: usize = 32;

/// Length in bytes of an Ed25519 signature.
pub const SIGNATURE_LEN: usize = 64;

/// Failure to construct a verifier from configured key material.
///
/// These are startup-time errors: the process must refuse to serve requests
/// when the configured public key is unusable.
#[derive(Debug, Error)]
pub enum KeyError {
    /// The configured key is not valid hexadecimal.
    #[error("public key is not valid hex")]
    InvalidHex(#[from] hex::FromHexError),

    /// The configured key decodes to the wrong number of bytes.
    #[error("public key must be {PUBLIC_KEY_LEN} bytes, got {0}")]
    InvalidLength(usize),

    /// The key bytes do not describe a valid Ed25519 point.
    #[error("public key bytes are not a valid Ed25519 key")]
    InvalidKey,
}

/// Rejection of an inbound request during signature verification.
///
/// Every variant maps to HTTP 401 at the boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Signature or timestamp header absent (or empty).
    #[error("missing signature or timestamp header")]
    MissingHeaders,

    /// Signature header present but not a 64-byte hex string.
    #[error("signature header is not a valid hex-encoded Ed25519 signature")]
    Malformed,

    /// Signature decoded cleanly but does not verify against the body.
    #[error("signature verification failed")]
    InvalidSignature,
}

/// Verifies that a request body was signed by the platform's published key.
#[derive(Debug, Clone)]
pub struct SignatureVerifier {
    key: VerifyingKey,
}

impl SignatureVerifier {
    /// Create a verifier around an already-parsed verifying key.
    #[must_use]
    pub const fn new(key: VerifyingKey) -> Self {
        Self { key }
    }

    /// Parse a hex-encoded 32-byte public key and build a verifier from it.
    ///
    /// # Errors
    ///
    /// Returns a [`KeyError`] when the string is not hex, decodes to the
    /// wrong length, or does not describe a valid Ed25519 key. Callers treat
    /// any of these as fatal at startup.
    pub fn from_hex(hex_key: &str) -> Result<Self, KeyError> {
        let bytes = hex::decode(hex_key.trim())?;
        let len = bytes.len();
        let bytes: [u8; PUBLIC_KEY_LEN] = bytes
            .try_into()
            .map_err(|_| KeyError::InvalidLength(len))?;
        let key = VerifyingKey::from_bytes(&bytes).map_err(|_| KeyError::InvalidKey)?;
        Ok(Self::new(key))
    }

    /// Verify a request against its signature and timestamp headers.
    ///
    /// The signed message is `timestamp ++ body`. Header presence is checked
    /// before any decoding or cryptographic work.
    ///
    /// # Errors
    ///
    /// - [`AuthError::MissingHeaders`] when either header is absent or empty
    /// - [`AuthError::Malformed`] when the signature is not 64 hex-decoded bytes
    /// - [`AuthError::InvalidSignature`] on cryptographic mismatch
    pub fn verify(
        &self,
        signature: Option<&str>,
        timestamp: Option<&str>,
        body: &[u8],
    ) -> Result<(), AuthError> {
        let (Some(signature), Some(timestamp)) = (signature, timestamp) else {
            return Err(AuthError::MissingHeaders);
        };
        if signature.is_empty() || timestamp.is_empty() {
            return Err(AuthError::MissingHeaders);
        }

        // from_slice rejects anything that is not exactly SIGNATURE_LEN bytes.
        let signature_bytes = hex::decode(signature).map_err(|_| AuthError::Malformed)?;
        let signature =
            Signature::from_slice(&signature_bytes).map_err(|_| AuthError::Malformed)?;

        let mut message = Vec::with_capacity(timestamp.len() + body.len());
        message.extend_from_slice(timestamp.as_bytes());
        message.extend_from_slice(body);

        self.key
            .verify(&message, &signature)
            .map_err(|_| AuthError::InvalidSignature)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use ed25519_dalek::{Signer, SigningKey};
    use rand::rngs::OsRng;

    fn test_keys() -> (SigningKey, SignatureVerifier) {
        let signing = SigningKey::generate(&mut OsRng);
        let verifier = SignatureVerifier::new(signing.verifying_key());
        (signing, verifier)
    }

    fn sign(key: &SigningKey, timestamp: &str, body: &[u8]) -> String {
        let mut message = timestamp.as_bytes().to_vec();
        message.extend_from_slice(body);
        hex::encode(key.sign(&message).to_bytes())
    }

    #[test]
    fn accepts_valid_signature() {
        let (signing, verifier) = test_keys();
        let body = br#"{"type":1}"#;
        let signature = sign(&signing, "1700000000", body);

        assert!(verifier
            .verify(Some(&signature), Some("1700000000"), body)
            .is_ok());
    }

    #[test]
    fn rejects_tampered_body() {
        let (signing, verifier) = test_keys();
        let signature = sign(&signing, "1700000000", br#"{"type":1}"#);

        let result = verifier.verify(Some(&signature), Some("1700000000"), br#"{"type":2}"#);
        assert_eq!(result, Err(AuthError::InvalidSignature));
    }

    #[test]
    fn rejects_tampered_timestamp() {
        let (signing, verifier) = test_keys();
        let body = br#"{"type":1}"#;
        let signature = sign(&signing, "1700000000", body);

        let result = verifier.verify(Some(&signature), Some("1700000001"), body);
        assert_eq!(result, Err(AuthError::InvalidSignature));
    }

    #[test]
    fn rejects_tampered_signature() {
        let (signing, verifier) = test_keys();
        let body = br#"{"type":1}"#;
        let signature = sign(&signing, "1700000000", body);

        // Flip one bit in the first signature byte.
        let mut bytes = hex::decode(&signature).unwrap();
        bytes[0] ^= 0x01;
        let tampered = hex::encode(bytes);

        let result = verifier.verify(Some(&tampered), Some("1700000000"), body);
        assert_eq!(result, Err(AuthError::InvalidSignature));
    }

    #[test]
    fn rejects_missing_headers_before_crypto() {
        let (signing, verifier) = test_keys();
        let body = br#"{"type":1}"#;
        let signature = sign(&signing, "1700000000", body);

        assert_eq!(
            verifier.verify(None, Some("1700000000"), body),
            Err(AuthError::MissingHeaders)
        );
        assert_eq!(
            verifier.verify(Some(&signature), None, body),
            Err(AuthError::MissingHeaders)
        );
        assert_eq!(verifier.verify(None, None, body), Err(AuthError::MissingHeaders));
    }

    #[test]
    fn rejects_empty_headers() {
        let (_, verifier) = test_keys();

        assert_eq!(
            verifier.verify(Some(""), Some("1700000000"), b"{}"),
            Err(AuthError::MissingHeaders)
        );
        assert_eq!(
            verifier.verify(Some("ab"), Some(""), b"{}"),
            Err(AuthError::MissingHeaders)
        );
    }

    #[test]
    fn rejects_non_hex_signature() {
        let (_, verifier) = test_keys();

        let result = verifier.verify(Some("not-hex!"), Some("1700000000"), b"{}");
        assert_eq!(result, Err(AuthError::Malformed));
    }

    #[test]
    fn rejects_wrong_length_signature() {
        let (_, verifier) = test_keys();

        // Valid hex, but 32 bytes instead of 64.
        let short = hex::encode([0u8; 32]);
        let result = verifier.verify(Some(&short), Some("1700000000"), b"{}");
        assert_eq!(result, Err(AuthError::Malformed));
    }

    #[test]
    fn from_hex_accepts_valid_key() {
        let signing = SigningKey::generate(&mut OsRng);
        let hex_key = hex::encode(signing.verifying_key().to_bytes());

        let verifier = SignatureVerifier::from_hex(&hex_key).unwrap();
        let signature = sign(&signing, "1", b"payload");
        assert!(verifier.verify(Some(&signature), Some("1"), b"payload").is_ok());
    }

    #[test]
    fn from_hex_rejects_bad_material() {
        assert!(matches!(
            SignatureVerifier::from_hex("zz"),
            Err(KeyError::InvalidHex(_))
        ));
        assert!(matches!(
            SignatureVerifier::from_hex(&hex::encode([0u8; 16])),
            Err(KeyError::InvalidLength(16))
        ));
    }
}
