/// Repository errors for domain layer.
///
/// The display text of a variant is what callers eventually see in the
/// `error` field of a response, so it stays human readable.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Record not found.")]
    NotFound,
    #[error("{0}")]
    Database(String),
}

impl RepositoryError {
    pub fn not_found() -> Self {
        RepositoryError::NotFound
    }
    pub fn database(message: impl Into<String>) -> Self {
        RepositoryError::Database(message.into())
    }
}
