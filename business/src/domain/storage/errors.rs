/// Failures reported by the object storage service.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StorageError {
    /// The service answered with an error status.
    #[error("{message}")]
    Rejected {
        status_code: Option<u16>,
        error: String,
        message: String,
    },
    /// The service could not be reached or its answer could not be read.
    #[error("{0}")]
    Transport(String),
}

impl StorageError {
    /// Short machine-friendly kind, surfaced as `details.error`.
    pub fn kind(&self) -> &str {
        match self {
            StorageError::Rejected { error, .. } => error,
            StorageError::Transport(_) => "transport_error",
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            StorageError::Rejected { status_code, .. } => *status_code,
            StorageError::Transport(_) => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StorageFileError {
    #[error("Authorization header required")]
    MissingCredential,
    #[error("Invalid authentication token")]
    InvalidCredential,
    #[error("filePaths must be a non-empty array")]
    EmptyPaths,
    #[error("Access denied: You can only delete your own files")]
    AccessDenied { invalid_paths: Vec<String> },
    #[error(transparent)]
    Storage(#[from] StorageError),
}
