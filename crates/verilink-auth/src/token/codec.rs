//! HMAC-SHA256 token signing and verification.
//!
//! Wire format: `<base64url(json payload)>.<base64url(hmac-sha256(base))>`,
//! both parts without padding. Verification needs nothing but the secret.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;
use tracing::{debug, warn};

use verilink_core::config::verify::VerifyConfig;
use verilink_core::error::AppError;
use verilink_core::result::AppResult;

use super::outcome::{InvalidReason, VerifyOutcome};
use super::payload::{PAYLOAD_VERSION, VerifyFields, VerifyPayload};

type HmacSha256 = Hmac<Sha256>;

/// Separator between the payload and signature parts.
const SEPARATOR: char = '.';

/// Tokens longer than this are rejected before any decoding work.
pub const MAX_TOKEN_LEN: usize = 4096;

/// Builds and verifies verification tokens.
///
/// Holds a keyed MAC prototype that is cloned per operation, so the codec is
/// `Send + Sync` and can be shared across request handlers behind an `Arc`.
#[derive(Clone)]
pub struct TokenCodec {
    mac: HmacSha256,
}

impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCodec")
            .field("algorithm", &"HMAC-SHA256")
            .finish()
    }
}

impl TokenCodec {
    /// Creates a codec from verification configuration.
    ///
    /// Fails when the secret is missing or blank.
    pub fn new(config: &VerifyConfig) -> AppResult<Self> {
        config.validate()?;
        if config.is_weak_secret() {
            warn!(
                len = config.hmac_secret.len(),
                "VERIFY_HMAC_SECRET is shorter than 32 bytes; consider a longer key"
            );
        }
        Self::from_secret(config.hmac_secret.as_bytes())
    }

    /// Creates a codec directly from key bytes.
    pub fn from_secret(secret: &[u8]) -> AppResult<Self> {
        if secret.iter().all(u8::is_ascii_whitespace) {
            return Err(AppError::configuration(
                "Verification secret must not be empty",
            ));
        }
        let mac = HmacSha256::new_from_slice(secret)
            .map_err(|e| AppError::configuration(format!("Invalid HMAC key: {e}")))?;
        Ok(Self { mac })
    }

    /// Builds a signed token for the given fields.
    ///
    /// Returns an `InvalidPayload` error when any identifier is empty.
    pub fn build_token(&self, fields: &VerifyFields) -> AppResult<String> {
        let payload = VerifyPayload::new(fields)?;
        self.sign(&payload)
    }

    /// Signs an already-built payload.
    pub fn sign(&self, payload: &VerifyPayload) -> AppResult<String> {
        let json = serde_json::to_vec(payload)?;
        let base = URL_SAFE_NO_PAD.encode(json);
        let signature = self.signature(&base);
        Ok(format!("{base}{SEPARATOR}{signature}"))
    }

    /// Verifies a token.
    ///
    /// Never fails: malformed or tampered input yields
    /// [`VerifyOutcome::Invalid`].
    pub fn verify_token(&self, token: &str) -> VerifyOutcome {
        match self.check(token) {
            Ok(payload) => VerifyOutcome::Valid(payload),
            Err(reason) => {
                debug!(%reason, token_len = token.len(), "Rejected verification token");
                VerifyOutcome::Invalid(reason)
            }
        }
    }

    fn check(&self, token: &str) -> Result<VerifyPayload, InvalidReason> {
        if token.len() > MAX_TOKEN_LEN {
            return Err(InvalidReason::Malformed);
        }

        let mut parts = token.split(SEPARATOR);
        let (Some(base), Some(signature), None) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(InvalidReason::Malformed);
        };
        if base.is_empty() || signature.is_empty() {
            return Err(InvalidReason::Malformed);
        }

        let expected = self.signature(base);
        if !bool::from(expected.as_bytes().ct_eq(signature.as_bytes())) {
            return Err(InvalidReason::BadSignature);
        }

        let json = URL_SAFE_NO_PAD
            .decode(base)
            .map_err(|_| InvalidReason::BadPayload)?;
        let payload: VerifyPayload =
            serde_json::from_slice(&json).map_err(|_| InvalidReason::BadPayload)?;

        if payload.version() != PAYLOAD_VERSION {
            return Err(InvalidReason::UnsupportedVersion);
        }
        if !payload.is_complete() {
            return Err(InvalidReason::BadPayload);
        }
        Ok(payload)
    }

    fn signature(&self, base: &str) -> String {
        let mut mac = self.mac.clone();
        mac.update(base.as_bytes());
        URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use verilink_core::error::ErrorKind;

    use super::*;

    const SECRET: &[u8] = b"test-secret-that-is-long-enough-123456";

    fn codec() -> TokenCodec {
        TokenCodec::from_secret(SECRET).unwrap()
    }

    fn sample() -> VerifyFields {
        VerifyFields::new("doc-1", "sign-1", "user-1")
    }

    #[test]
    fn test_round_trip() {
        let codec = codec();
        let token = codec.build_token(&sample()).unwrap();
        assert_eq!(token.split('.').count(), 2);

        let outcome = codec.verify_token(&token);
        let payload = outcome.payload().expect("token should verify");
        assert_eq!(payload.fields(), sample());
        assert_eq!(payload.version(), 1);
    }

    #[test]
    fn test_round_trip_unicode_and_separators() {
        let codec = codec();
        let fields = VerifyFields::new("протокол/42", "sig.with.dots", "user+1@example.org");
        let token = codec.build_token(&fields).unwrap();
        assert_eq!(token.split('.').count(), 2);
        assert_eq!(codec.verify_token(&token).into_payload().unwrap().fields(), fields);
    }

    #[test]
    fn test_token_is_deterministic() {
        let codec = codec();
        assert_eq!(
            codec.build_token(&sample()).unwrap(),
            codec.build_token(&sample()).unwrap()
        );
    }

    #[test]
    fn test_build_rejects_empty_field() {
        let err = codec()
            .build_token(&VerifyFields::new("doc-1", "", "user-1"))
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidPayload);
    }

    #[test]
    fn test_every_signature_flip_detected() {
        let codec = codec();
        let token = codec.build_token(&sample()).unwrap();
        let dot = token.find('.').unwrap();

        for i in dot + 1..token.len() {
            let mut bytes = token.clone().into_bytes();
            bytes[i] = if bytes[i] == b'A' { b'B' } else { b'A' };
            let tampered = String::from_utf8(bytes).unwrap();
            assert_eq!(
                codec.verify_token(&tampered),
                VerifyOutcome::Invalid(InvalidReason::BadSignature),
                "flip at {i} was accepted"
            );
        }
    }

    #[test]
    fn test_payload_tamper_detected() {
        let codec = codec();
        let token = codec.build_token(&sample()).unwrap();
        let (_, signature) = token.split_once('.').unwrap();

        let forged_json = br#"{"d":"doc-2","s":"sign-1","u":"user-1","v":1}"#;
        let forged = format!("{}.{signature}", URL_SAFE_NO_PAD.encode(forged_json));
        assert!(!codec.verify_token(&forged).is_valid());
    }

    #[test]
    fn test_malformed_inputs() {
        let codec = codec();
        for input in ["not-a-token", "", "a.b.c", ".", "abc.", ".abc", "a..b"] {
            assert_eq!(
                codec.verify_token(input),
                VerifyOutcome::Invalid(InvalidReason::Malformed),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn test_oversized_token_rejected() {
        let huge = format!("{}.{}", "a".repeat(MAX_TOKEN_LEN), "b");
        assert_eq!(
            codec().verify_token(&huge),
            VerifyOutcome::Invalid(InvalidReason::Malformed)
        );
    }

    #[test]
    fn test_other_secret_rejected() {
        let token = codec().build_token(&sample()).unwrap();
        let other = TokenCodec::from_secret(b"a-completely-different-secret-value").unwrap();
        assert_eq!(
            other.verify_token(&token),
            VerifyOutcome::Invalid(InvalidReason::BadSignature)
        );
    }

    #[test]
    fn test_signed_garbage_payload_rejected() {
        let codec = codec();
        let base = URL_SAFE_NO_PAD.encode(b"not json");
        let token = format!("{base}.{}", codec.signature(&base));
        assert_eq!(
            codec.verify_token(&token),
            VerifyOutcome::Invalid(InvalidReason::BadPayload)
        );
    }

    #[test]
    fn test_signed_unknown_version_rejected() {
        let codec = codec();
        let base = URL_SAFE_NO_PAD.encode(br#"{"d":"doc-1","s":"sign-1","u":"user-1","v":2}"#);
        let token = format!("{base}.{}", codec.signature(&base));
        assert_eq!(
            codec.verify_token(&token),
            VerifyOutcome::Invalid(InvalidReason::UnsupportedVersion)
        );
    }

    #[test]
    fn test_empty_secret_rejected() {
        assert!(TokenCodec::from_secret(b"").is_err());
        assert!(TokenCodec::from_secret(b"   ").is_err());
        let config = VerifyConfig::default();
        let err = TokenCodec::new(&config).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
    }
}
