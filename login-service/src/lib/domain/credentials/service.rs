use std::sync::Arc;

use async_trait::async_trait;

use crate::credentials::errors::VerifyError;
use crate::credentials::models::CredentialCheck;
use crate::credentials::models::CredentialInput;
use crate::credentials::ports::CredentialVerifierPort;
use crate::credentials::ports::SecretComparator;
use crate::user::models::Identity;
use crate::user::ports::UserDirectory;

/// Credential verifier with injected directory and comparator.
///
/// Stateless; one instance is shared by every request.
pub struct CredentialVerifier<UD, SC>
where
    UD: UserDirectory,
    SC: SecretComparator,
{
    directory: Arc<UD>,
    comparator: Arc<SC>,
}

impl<UD, SC> CredentialVerifier<UD, SC>
where
    UD: UserDirectory,
    SC: SecretComparator,
{
    /// Create a new verifier with injected dependencies.
    ///
    /// # Arguments
    /// * `directory` - User lookup implementation
    /// * `comparator` - Password hash comparison implementation
    pub fn new(directory: Arc<UD>, comparator: Arc<SC>) -> Self {
        Self {
            directory,
            comparator,
        }
    }
}

#[async_trait]
impl<UD, SC> CredentialVerifierPort for CredentialVerifier<UD, SC>
where
    UD: UserDirectory,
    SC: SecretComparator,
{
    async fn verify(&self, input: CredentialInput) -> Result<Option<Identity>, VerifyError> {
        let credentials = match input.parse() {
            CredentialCheck::Valid(credentials) => credentials,
            CredentialCheck::Invalid(reason) => {
                tracing::debug!(reason = "malformed", detail = %reason, "Invalid credentials");
                return Ok(None);
            }
        };

        let user = match self.directory.find_by_email(&credentials.email).await {
            Ok(Some(user)) => user,
            Ok(None) => {
                // same comparison cost as a wrong password; outcome is irrelevant
                let _ = self
                    .comparator
                    .compare(credentials.password.expose(), auth::DECOY_HASH)
                    .await;
                tracing::debug!(reason = "unknown_user", "Invalid credentials");
                return Ok(None);
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to fetch user");
                return Err(VerifyError::Directory(e));
            }
        };

        let matches = self
            .comparator
            .compare(credentials.password.expose(), &user.password_hash)
            .await
            .map_err(|e| {
                tracing::error!(user_id = %user.id, error = %e, "Failed to compare password");
                VerifyError::Comparator(e)
            })?;

        if !matches {
            tracing::debug!(reason = "mismatch", user_id = %user.id, "Invalid credentials");
            return Ok(None);
        }

        tracing::info!(user_id = %user.id, "User authenticated");
        Ok(Some(Identity::from(user)))
    }
}
