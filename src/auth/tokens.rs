/**
 * Bearer Token Issuance and Verification
 *
 * Signs and validates time-limited JWT bearer tokens (HS256). A token binds
 * a subject identity string (the credential email) and an absolute expiry
 * timestamp.
 *
 * # Security
 *
 * - Verification rejects signature mismatches, structurally malformed
 *   tokens, and expired tokens, and all three collapse to the same `None`
 *   outcome so callers cannot distinguish "tampered" from "expired"
 * - There is no refresh or rotation mechanism; clients re-authenticate via
 *   `POST /token` after expiry
 */

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// JWT claims carried by every issued token.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject identity (credential email)
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
}

/// Token issuer/verifier holding the signing secret and the configured TTL.
///
/// Constructed once at startup and passed through `AppState`; nothing reads
/// the secret from ambient global state.
#[derive(Clone)]
pub struct TokenSigner {
    secret: String,
    ttl: Duration,
}

impl TokenSigner {
    pub fn new(secret: String, ttl: Duration) -> Self {
        Self { secret, ttl }
    }

    /// Issue a signed token for the given subject, expiring after the
    /// configured TTL.
    pub fn issue(&self, subject: &str) -> Result<String, jsonwebtoken::errors::Error> {
        self.issue_with_ttl(subject, self.ttl)
    }

    /// Issue a token with an explicit TTL. Negative durations produce an
    /// already-expired token, which the expiry tests rely on.
    pub fn issue_with_ttl(
        &self,
        subject: &str,
        ttl: Duration,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now();
        let claims = Claims {
            sub: subject.to_string(),
            exp: (now + ttl).timestamp(),
            iat: now.timestamp(),
        };

        let key = EncodingKey::from_secret(self.secret.as_ref());
        encode(&Header::default(), &claims, &key)
    }

    /// Verify a token and return its claims.
    ///
    /// Returns `None` for any invalid token: bad signature, malformed
    /// structure, or expired.
    pub fn verify(&self, token: &str) -> Option<Claims> {
        let key = DecodingKey::from_secret(self.secret.as_ref());
        let validation = Validation::default();

        match decode::<Claims>(token, &key, &validation) {
            Ok(data) => Some(data.claims),
            Err(e) => {
                tracing::debug!("token rejected: {:?}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signer() -> TokenSigner {
        TokenSigner::new("test-secret".to_string(), Duration::minutes(20))
    }

    #[test]
    fn test_issue_and_verify_roundtrip() {
        let signer = signer();
        let token = signer.issue("student@college.edu").unwrap();
        let claims = signer.verify(&token).unwrap();
        assert_eq!(claims.sub, "student@college.edu");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_expired_token_rejected() {
        let signer = signer();
        // Well past the default validation leeway.
        let token = signer
            .issue_with_ttl("student@college.edu", Duration::hours(-1))
            .unwrap();
        assert!(signer.verify(&token).is_none());
    }

    #[test]
    fn test_malformed_token_rejected() {
        let signer = signer();
        assert!(signer.verify("not.a.token").is_none());
        assert!(signer.verify("").is_none());
    }

    #[test]
    fn test_foreign_signature_rejected() {
        let signer = signer();
        let other = TokenSigner::new("other-secret".to_string(), Duration::minutes(20));
        let token = other.issue("student@college.edu").unwrap();
        assert!(signer.verify(&token).is_none());
    }
}
