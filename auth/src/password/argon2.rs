use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::Error as PhcError;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Algorithm;
use argon2::Argon2;

use super::errors::PasswordError;
use super::legacy;

/// Well-formed Argon2id hash at the default cost that no password matches.
///
/// Verifying against it costs the same as verifying a real record, which
/// keeps lookups for unknown accounts as slow as wrong-password attempts.
pub const DECOY_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$bG9naW4tc2VydmljZS1kZQ$AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

/// Argon2 password hasher and verifier.
///
/// Hashes are produced as Argon2id PHC strings. Verification accepts any
/// Argon2 variant and reads cost parameters from the stored hash, so records
/// hashed under older parameters keep verifying. bcrypt hashes are routed to
/// the legacy verifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordHasher;

impl PasswordHasher {
    /// Create a new password hasher with the crate's default Argon2id cost.
    pub fn new() -> Self {
        Self
    }

    /// Hash a plaintext password for storage.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to hash
    ///
    /// # Returns
    /// PHC string (algorithm, parameters, salt and digest)
    ///
    /// # Errors
    /// * `HashingFailed` - Argon2 rejected the input or parameters
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a plaintext password against a stored hash.
    ///
    /// # Arguments
    /// * `password` - Plaintext password supplied by the caller
    /// * `hash` - Stored hash, Argon2 PHC string or bcrypt
    ///
    /// # Returns
    /// `true` if the password matches, `false` on mismatch
    ///
    /// # Errors
    /// * `MalformedHash` - Stored hash does not parse as a PHC string
    /// * `UnsupportedAlgorithm` - Hash was neither Argon2 nor bcrypt
    /// * `VerificationFailed` - Argon2 failed for a reason other than mismatch
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        if legacy::is_bcrypt_hash(hash) {
            return legacy::verify_bcrypt(password, hash);
        }

        let parsed_hash =
            PasswordHash::new(hash).map_err(|e| PasswordError::MalformedHash(e.to_string()))?;

        let algorithm = parsed_hash.algorithm;
        if Algorithm::try_from(algorithm).is_err() {
            return Err(PasswordError::UnsupportedAlgorithm(algorithm.to_string()));
        }

        match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(PhcError::Password) => Ok(false),
            Err(e) => Err(PasswordError::VerificationFailed(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash("secret1").expect("Failed to hash password");

        assert!(hash.starts_with("$argon2id$"));
        assert!(hasher
            .verify("secret1", &hash)
            .expect("Failed to verify password"));
        assert!(!hasher
            .verify("secret2", &hash)
            .expect("Failed to verify password"));
    }

    #[test]
    fn test_hashes_are_salted() {
        let hasher = PasswordHasher::new();
        let first = hasher.hash("secret1").expect("Failed to hash password");
        let second = hasher.hash("secret1").expect("Failed to hash password");

        assert_ne!(first, second);
    }

    #[test]
    fn test_verify_bcrypt_hash() {
        let hasher = PasswordHasher::new();
        let hash = "$2b$10$N9qo8uLOickgx2ZMRZoMyexQqbzVZ5QaRViw6HMmxL8lZCz/UF57.";

        assert!(hasher.verify("secret1", hash).unwrap());
        assert!(!hasher.verify("secret2", hash).unwrap());
    }

    #[test]
    fn test_decoy_hash_never_matches() {
        let hasher = PasswordHasher::new();

        assert!(!hasher.verify("secret1", DECOY_HASH).unwrap());
        assert!(!hasher.verify("", DECOY_HASH).unwrap());
    }

    #[test]
    fn test_verify_malformed_hash() {
        let hasher = PasswordHasher::new();
        let result = hasher.verify("secret1", "invalid_hash");

        assert!(matches!(result, Err(PasswordError::MalformedHash(_))));
    }

    #[test]
    fn test_verify_foreign_algorithm() {
        let hasher = PasswordHasher::new();
        let result = hasher.verify(
            "secret1",
            "$pbkdf2-sha256$i=1000$c2FsdHNhbHQ$ZGlnZXN0ZGlnZXN0ZGlnZXN0ZGlnZXN0",
        );

        assert!(matches!(result, Err(PasswordError::UnsupportedAlgorithm(_))));
    }
}
