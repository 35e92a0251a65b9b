use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::services::IdentityVerifier;
use crate::domain::logger::Logger;
use crate::domain::storage::errors::StorageFileError;
use crate::domain::storage::model::{PRODUCT_IMAGES_BUCKET, StoragePath, StoredObject};
use crate::domain::storage::repository::ObjectStorage;
use crate::domain::storage::use_cases::delete_files::{
    DeleteStorageFilesParams, DeleteStorageFilesUseCase,
};

/// Deletes raw objects from the image bucket. Ownership comes from the path
/// itself: every key must sit under the caller's user id.
pub struct DeleteStorageFilesUseCaseImpl {
    pub storage: Arc<dyn ObjectStorage>,
    pub identity: Arc<dyn IdentityVerifier>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteStorageFilesUseCase for DeleteStorageFilesUseCaseImpl {
    async fn execute(
        &self,
        params: DeleteStorageFilesParams,
    ) -> Result<Vec<StoredObject>, StorageFileError> {
        let credential = params
            .credential
            .ok_or(StorageFileError::MissingCredential)?;

        let user_id = self.identity.resolve(&credential).await.map_err(|e| {
            self.logger.error(&format!("Auth error: {}", e));
            StorageFileError::InvalidCredential
        })?;

        self.logger
            .info(&format!("Authenticated user: {}", user_id));

        let paths: Vec<StoragePath> = match params.file_paths {
            Some(paths) if !paths.is_empty() => {
                paths.into_iter().map(StoragePath::new).collect()
            }
            _ => return Err(StorageFileError::EmptyPaths),
        };

        self.logger.info(&format!(
            "Attempting to delete {} files: {:?}",
            paths.len(),
            paths.iter().map(StoragePath::as_str).collect::<Vec<_>>()
        ));

        let invalid_paths: Vec<String> = paths
            .iter()
            .filter(|path| !path.is_owned_by(&user_id))
            .map(|path| path.as_str().to_string())
            .collect();

        if !invalid_paths.is_empty() {
            self.logger.warn(&format!(
                "Access denied for user {} on paths: {:?}",
                user_id, invalid_paths
            ));
            return Err(StorageFileError::AccessDenied { invalid_paths });
        }

        let removed = self
            .storage
            .remove(PRODUCT_IMAGES_BUCKET, &paths)
            .await
            .map_err(|e| {
                self.logger
                    .error(&format!("Storage deletion error: {}", e));
                StorageFileError::Storage(e)
            })?;

        self.logger.info(&format!(
            "Deleted {} of {} requested files for user {}",
            removed.len(),
            paths.len(),
            user_id
        ));

        Ok(removed)
    }
}
