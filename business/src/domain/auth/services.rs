use async_trait::async_trait;

use super::errors::AuthError;
use crate::domain::shared::value_objects::{Credential, UserId};

/// Service port resolving a bearer credential to the caller's identity.
///
/// Implementations are authoritative: whatever identity they return is
/// trusted for ownership checks.
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    async fn resolve(&self, credential: &Credential) -> Result<UserId, AuthError>;
}
