use std::fmt;

use serde_json::Map;
use serde_json::Value;
use zeroize::Zeroizing;

use crate::credentials::errors::CredentialError;
use crate::credentials::errors::PasswordPolicyError;
use crate::user::models::EmailAddress;

const EMAIL_FIELD: &str = "email";
const PASSWORD_FIELD: &str = "password";

/// Unvalidated credential input as submitted by the sign-in form.
///
/// Fields may be missing or of any JSON type. Nothing inside is trusted until
/// [`CredentialInput::parse`] has run.
#[derive(Clone, Default)]
pub struct CredentialInput(Map<String, Value>);

impl CredentialInput {
    /// Wrap an already decoded key-value map.
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Decode a request body leniently.
    ///
    /// Anything that is not a JSON object decodes to an empty input, which
    /// then fails validation like any other malformed submission.
    pub fn from_json_slice(body: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(fields)) => Self(fields),
            _ => Self::default(),
        }
    }

    /// Build an input from an email and password pair.
    pub fn from_parts(email: impl Into<String>, password: impl Into<String>) -> Self {
        let mut fields = Map::new();
        fields.insert(EMAIL_FIELD.to_string(), Value::String(email.into()));
        fields.insert(PASSWORD_FIELD.to_string(), Value::String(password.into()));
        Self(fields)
    }

    /// Validate the input shape, consuming it.
    ///
    /// # Returns
    /// `Valid` with typed credentials, or `Invalid` naming the first failed check
    pub fn parse(mut self) -> CredentialCheck {
        match Self::validate(&mut self.0) {
            Ok(credentials) => CredentialCheck::Valid(credentials),
            Err(reason) => CredentialCheck::Invalid(reason),
        }
    }

    fn validate(fields: &mut Map<String, Value>) -> Result<ValidatedCredentials, CredentialError> {
        let email = Self::take_string(fields, EMAIL_FIELD)?;
        let password = Self::take_string(fields, PASSWORD_FIELD)?;

        Ok(ValidatedCredentials {
            email: EmailAddress::new(email)?,
            password: Password::new(password)?,
        })
    }

    fn take_string(
        fields: &mut Map<String, Value>,
        name: &'static str,
    ) -> Result<String, CredentialError> {
        match fields.remove(name) {
            Some(Value::String(value)) => Ok(value),
            Some(_) => Err(CredentialError::NotAString(name)),
            None => Err(CredentialError::MissingField(name)),
        }
    }
}

impl fmt::Debug for CredentialInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialInput")
            .field("fields", &self.0.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Outcome of shape validation.
#[derive(Debug)]
pub enum CredentialCheck {
    Valid(ValidatedCredentials),
    Invalid(CredentialError),
}

/// Credentials that passed shape validation.
#[derive(Debug, Clone)]
pub struct ValidatedCredentials {
    pub email: EmailAddress,
    pub password: Password,
}

/// Plaintext password value type
///
/// At least 6 characters. The buffer is wiped on drop and never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(Zeroizing<String>);

impl Password {
    const MIN_LENGTH: usize = 6;

    /// Create a new password that satisfies the length policy.
    ///
    /// Length is counted in characters, not bytes.
    ///
    /// # Errors
    /// * `TooShort` - Password shorter than 6 characters
    pub fn new(password: String) -> Result<Self, PasswordPolicyError> {
        let password = Zeroizing::new(password);
        let length = password.chars().count();
        if length < Self::MIN_LENGTH {
            return Err(PasswordPolicyError::TooShort {
                min: Self::MIN_LENGTH,
                actual: length,
            });
        }
        Ok(Self(password))
    }

    /// Plaintext for handing to the comparator.
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}
