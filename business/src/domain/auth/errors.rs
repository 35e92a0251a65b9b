#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("auth.invalid_credential: {0}")]
    InvalidCredential(String),
    #[error("auth.unknown_user")]
    UnknownUser,
    #[error("auth.verifier_unavailable: {0}")]
    Unavailable(String),
}
