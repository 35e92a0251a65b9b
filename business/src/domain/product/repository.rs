use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::ProductRecord;
use super::value_objects::ProductId;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Owner and image locations of a product; `RepositoryError::NotFound`
    /// when no row matches.
    async fn get_by_id(&self, id: &ProductId) -> Result<ProductRecord, RepositoryError>;
    async fn delete(&self, id: &ProductId) -> Result<(), RepositoryError>;
}
