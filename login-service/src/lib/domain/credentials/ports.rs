use async_trait::async_trait;

use crate::credentials::errors::ComparatorError;
use crate::credentials::errors::VerifyError;
use crate::credentials::models::CredentialInput;
use crate::user::models::Identity;

/// Port for the credential verification operation.
#[async_trait]
pub trait CredentialVerifierPort: Send + Sync + 'static {
    /// Decide whether raw credentials authenticate a registered user.
    ///
    /// # Arguments
    /// * `input` - Unvalidated credential input from the sign-in form
    ///
    /// # Returns
    /// `Some(identity)` when the password matches the stored hash, `None` for
    /// every refusal (malformed input, unknown email, wrong password)
    ///
    /// # Errors
    /// * `Directory` - User directory could not be queried
    /// * `Comparator` - Stored hash could not be compared
    async fn verify(&self, input: CredentialInput) -> Result<Option<Identity>, VerifyError>;
}

/// Compares a plaintext secret against a stored hash.
#[async_trait]
pub trait SecretComparator: Send + Sync + 'static {
    /// Compare a plaintext password with a stored hash.
    ///
    /// # Arguments
    /// * `plaintext` - Password supplied by the caller
    /// * `hash` - Hash stored on the user record
    ///
    /// # Returns
    /// `true` on match, `false` on mismatch
    ///
    /// # Errors
    /// * `UnusableHash` - Stored hash is malformed or of an unknown scheme
    /// * `Failed` - Comparison could not be carried out
    async fn compare(&self, plaintext: &str, hash: &str) -> Result<bool, ComparatorError>;
}
