#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("Product ID is required.")]
    MissingId,
    #[error("User not authenticated.")]
    Unauthenticated,
    #[error("Product not found.")]
    NotFound,
    #[error("Permission denied. You are not the owner of this product.")]
    PermissionDenied,
    #[error(transparent)]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
