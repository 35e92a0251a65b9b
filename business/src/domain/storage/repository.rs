use async_trait::async_trait;

use super::errors::StorageError;
use super::model::{StoragePath, StoredObject};

/// Object storage port. Runs with service-level privileges; callers are
/// responsible for authorization before invoking it.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Removes every path in one round trip and returns the objects the
    /// service actually removed.
    async fn remove(
        &self,
        bucket: &str,
        paths: &[StoragePath],
    ) -> Result<Vec<StoredObject>, StorageError>;
}
