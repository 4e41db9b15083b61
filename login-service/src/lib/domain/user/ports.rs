use async_trait::async_trait;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;
use crate::user::errors::DirectoryError;

/// Read access to registered users.
#[async_trait]
pub trait UserDirectory: Send + Sync + 'static {
    /// Retrieve user by email address.
    ///
    /// # Arguments
    /// * `email` - Validated email address
    ///
    /// # Returns
    /// Optional user record (None if no user is registered under this email)
    ///
    /// # Errors
    /// * `Connection` - Directory could not be reached
    /// * `Query` - Directory query failed
    /// * `CorruptRecord` - Stored record could not be mapped to a user
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, DirectoryError>;
}
