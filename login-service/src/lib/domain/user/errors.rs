use thiserror::Error;

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Infrastructure failure while querying the user directory.
///
/// Never a business outcome: an absent user is `Ok(None)`, not an error.
#[derive(Debug, Clone, Error)]
pub enum DirectoryError {
    #[error("Connection to user directory failed: {0}")]
    Connection(String),

    #[error("User directory query failed: {0}")]
    Query(String),

    #[error("User directory returned a corrupt record: {0}")]
    CorruptRecord(String),
}

impl From<EmailError> for DirectoryError {
    fn from(err: EmailError) -> Self {
        DirectoryError::CorruptRecord(err.to_string())
    }
}
