use thiserror::Error;

use crate::user::errors::DirectoryError;
use crate::user::errors::EmailError;

/// Error for Password policy failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordPolicyError {
    #[error("Password too short: minimum {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },
}

/// Reason a raw credential input failed shape validation.
///
/// Internal only. Callers of the verifier never see which check failed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CredentialError {
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("Field is not a string: {0}")]
    NotAString(&'static str),

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Invalid password: {0}")]
    InvalidPassword(#[from] PasswordPolicyError),
}

/// Error for secret comparison failures
///
/// A mismatch is a normal `false`; these are failures to compare at all.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ComparatorError {
    #[error("Stored password hash is unusable: {0}")]
    UnusableHash(String),

    #[error("Password comparison failed: {0}")]
    Failed(String),
}

/// Operational failure during verification.
///
/// Distinct from a refusal, which is `Ok(None)`.
#[derive(Debug, Clone, Error)]
pub enum VerifyError {
    #[error("Failed to fetch user: {0}")]
    Directory(#[from] DirectoryError),

    #[error("Failed to compare password: {0}")]
    Comparator(#[from] ComparatorError),
}
