use async_trait::async_trait;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::Deserialize;

use business::domain::auth::errors::AuthError;
use business::domain::auth::services::IdentityVerifier;
use business::domain::shared::value_objects::{Credential, UserId};

const AUDIENCE: &str = "authenticated";

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct AccessTokenClaims {
    sub: String,
    aud: String,
    exp: u64,
    role: Option<String>,
}

/// Verifies access tokens locally against the project's HS256 secret,
/// avoiding a round trip to the auth service.
pub struct JwtIdentityVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl JwtIdentityVerifier {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[AUDIENCE]);
        validation.validate_exp = true;

        Self {
            key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    fn subject(&self, token: &str) -> Result<String, AuthError> {
        let token_data = decode::<AccessTokenClaims>(token, &self.key, &self.validation)
            .map_err(|e| AuthError::InvalidCredential(format!("auth.token_validation_failed: {e}")))?;

        let sub = token_data.claims.sub;
        if sub.trim().is_empty() {
            return Err(AuthError::UnknownUser);
        }
        Ok(sub)
    }
}

#[async_trait]
impl IdentityVerifier for JwtIdentityVerifier {
    async fn resolve(&self, credential: &Credential) -> Result<UserId, AuthError> {
        self.subject(credential.expose()).map(UserId::new)
    }
}
