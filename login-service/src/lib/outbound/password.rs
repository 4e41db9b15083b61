use async_trait::async_trait;
use auth::PasswordError;
use auth::PasswordHasher;

use crate::credentials::errors::ComparatorError;
use crate::credentials::ports::SecretComparator;

/// Secret comparator for stored Argon2 and legacy bcrypt hashes.
///
/// Verification runs on the blocking thread pool so the hash computation
/// does not stall the async runtime.
#[derive(Debug, Clone, Default)]
pub struct PasswordHashComparator {
    hasher: PasswordHasher,
}

impl PasswordHashComparator {
    pub fn new() -> Self {
        Self {
            hasher: PasswordHasher::new(),
        }
    }
}

impl From<PasswordError> for ComparatorError {
    fn from(err: PasswordError) -> Self {
        match err {
            PasswordError::MalformedHash(_) | PasswordError::UnsupportedAlgorithm(_) => {
                ComparatorError::UnusableHash(err.to_string())
            }
            PasswordError::HashingFailed(_) | PasswordError::VerificationFailed(_) => {
                ComparatorError::Failed(err.to_string())
            }
        }
    }
}

#[async_trait]
impl SecretComparator for PasswordHashComparator {
    async fn compare(&self, plaintext: &str, hash: &str) -> Result<bool, ComparatorError> {
        let hasher = self.hasher;
        let plaintext = zeroize::Zeroizing::new(plaintext.to_string());
        let hash = hash.to_string();

        tokio::task::spawn_blocking(move || hasher.verify(&plaintext, &hash))
            .await
            .map_err(|e| ComparatorError::Failed(format!("Comparison task failed: {}", e)))?
            .map_err(ComparatorError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_compare_matching_password() {
        let hash = PasswordHasher::new().hash("secret1").unwrap();
        let comparator = PasswordHashComparator::new();

        assert!(comparator.compare("secret1", &hash).await.unwrap());
        assert!(!comparator.compare("secret2", &hash).await.unwrap());
    }

    #[tokio::test]
    async fn test_compare_malformed_hash() {
        let comparator = PasswordHashComparator::new();
        let result = comparator.compare("secret1", "plaintext-in-db").await;

        assert!(matches!(result, Err(ComparatorError::UnusableHash(_))));
    }

    #[tokio::test]
    async fn test_compare_legacy_bcrypt_hash() {
        let hash = "$2b$10$N9qo8uLOickgx2ZMRZoMyexQqbzVZ5QaRViw6HMmxL8lZCz/UF57.";
        let comparator = PasswordHashComparator::new();

        assert!(comparator.compare("secret1", hash).await.unwrap());
        assert!(!comparator.compare("secret2", hash).await.unwrap());
    }
}
