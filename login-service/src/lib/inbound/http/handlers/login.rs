use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::credentials::models::CredentialInput;
use crate::inbound::http::router::AppState;
use crate::user::models::Identity;

/// Credentials sign-in callback.
///
/// The body is read as raw bytes and decoded leniently so that a body that is
/// not JSON is refused exactly like a wrong password.
pub async fn login(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    let input = CredentialInput::from_json_slice(&body);

    match state.verifier.verify(input).await? {
        Some(identity) => Ok(ApiSuccess::new(
            StatusCode::OK,
            LoginResponseData {
                user: (&identity).into(),
            },
        )),
        None => Err(ApiError::invalid_credentials()),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub user: UserData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserData {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Identity> for UserData {
    fn from(identity: &Identity) -> Self {
        Self {
            id: identity.id.to_string(),
            name: identity.name.clone(),
            email: identity.email.as_str().to_string(),
            created_at: identity.created_at,
        }
    }
}
