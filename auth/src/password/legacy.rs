use super::errors::PasswordError;

const BCRYPT_PREFIXES: [&str; 3] = ["$2a$", "$2b$", "$2y$"];

/// Whether a stored hash is in bcrypt modular crypt format.
pub fn is_bcrypt_hash(hash: &str) -> bool {
    BCRYPT_PREFIXES.iter().any(|prefix| hash.starts_with(prefix))
}

/// Verify a plaintext password against a bcrypt hash.
///
/// Records created before the move to Argon2id carry `$2b$` hashes; they
/// keep verifying here until they are rehashed.
///
/// # Errors
/// * `MalformedHash` - Hash has a bcrypt prefix but does not decode
pub fn verify_bcrypt(password: &str, hash: &str) -> Result<bool, PasswordError> {
    bcrypt::verify(password, hash).map_err(|e| PasswordError::MalformedHash(e.to_string()))
}
