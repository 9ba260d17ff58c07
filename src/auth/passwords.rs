/**
 * Password Hashing
 *
 * One-way credential hashing built on bcrypt. Each call to `hash_password`
 * draws a fresh random salt, so hashing the same plaintext twice yields
 * different strings; `verify_password` still accepts any of them.
 *
 * # Security
 *
 * - Plaintext passwords are hashed before storage and never logged
 * - Verification against a malformed or foreign hash string returns `false`
 *   rather than an error, so callers never special-case corrupt stored hashes
 */

use crate::error::ApiError;

/// Hash a plaintext password with bcrypt and a per-call random salt.
pub fn hash_password(plain: &str) -> Result<String, ApiError> {
    bcrypt::hash(plain, bcrypt::DEFAULT_COST).map_err(|e| {
        tracing::error!("password hashing failed: {:?}", e);
        ApiError::internal("could not hash password")
    })
}

/// Verify a plaintext password against a stored bcrypt hash.
///
/// A hash string that bcrypt cannot parse counts as a mismatch, not an
/// error.
pub fn verify_password(plain: &str, hashed: &str) -> bool {
    bcrypt::verify(plain, hashed).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let hash = hash_password("secret-password").unwrap();
        assert!(verify_password("secret-password", &hash));
    }

    #[test]
    fn test_wrong_password_rejected() {
        let hash = hash_password("secret-password").unwrap();
        assert!(!verify_password("other-password", &hash));
    }

    #[test]
    fn test_salt_is_random_per_call() {
        let first = hash_password("same-input").unwrap();
        let second = hash_password("same-input").unwrap();
        assert_ne!(first, second);
        assert!(verify_password("same-input", &first));
        assert!(verify_password("same-input", &second));
    }

    #[test]
    fn test_malformed_hash_is_a_mismatch_not_an_error() {
        assert!(!verify_password("anything", "not-a-bcrypt-hash"));
        assert!(!verify_password("anything", ""));
        assert!(!verify_password("anything", "$2b$totally$garbage"));
    }
}
