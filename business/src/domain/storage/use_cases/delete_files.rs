use async_trait::async_trait;

use crate::domain::shared::value_objects::Credential;
use crate::domain::storage::errors::StorageFileError;
use crate::domain::storage::model::StoredObject;

pub struct DeleteStorageFilesParams {
    pub credential: Option<Credential>,
    /// `None` when the request carried no usable list of paths.
    pub file_paths: Option<Vec<String>>,
}

#[async_trait]
pub trait DeleteStorageFilesUseCase: Send + Sync {
    async fn execute(
        &self,
        params: DeleteStorageFilesParams,
    ) -> Result<Vec<StoredObject>, StorageFileError>;
}
