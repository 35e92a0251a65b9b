use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;

use business::domain::auth::errors::AuthError;
use business::domain::auth::services::IdentityVerifier;
use business::domain::shared::value_objects::{Credential, UserId};

use crate::client::SupabaseClient;

#[derive(Deserialize)]
struct AuthUserResponse {
    id: Option<String>,
}

/// Resolves access tokens by asking the auth service who they belong to.
pub struct SupabaseIdentityVerifier {
    client: SupabaseClient,
}

impl SupabaseIdentityVerifier {
    pub fn new(client: SupabaseClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl IdentityVerifier for SupabaseIdentityVerifier {
    async fn resolve(&self, credential: &Credential) -> Result<UserId, AuthError> {
        let response = self
            .client
            .client
            .get(self.client.user_url())
            .header("apikey", &self.client.service_key)
            .bearer_auth(credential.expose())
            .send()
            .await
            .map_err(|e| AuthError::Unavailable(e.to_string()))?;

        let status = response.status();
        if status.is_client_error() {
            tracing::debug!(%status, "Auth service rejected access token");
            return Err(AuthError::InvalidCredential(format!(
                "auth service answered {}",
                status
            )));
        }
        if status != StatusCode::OK {
            return Err(AuthError::Unavailable(format!(
                "auth service answered {}",
                status
            )));
        }

        let user: AuthUserResponse = response
            .json()
            .await
            .map_err(|e| AuthError::Unavailable(format!("auth.response_parse_failed: {e}")))?;

        match user.id {
            Some(id) if !id.trim().is_empty() => Ok(UserId::new(id)),
            _ => Err(AuthError::UnknownUser),
        }
    }
}
