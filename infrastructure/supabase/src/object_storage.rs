use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use business::domain::storage::errors::StorageError;
use business::domain::storage::model::{StoragePath, StoredObject};
use business::domain::storage::repository::ObjectStorage;

use crate::client::SupabaseClient;

#[derive(Serialize)]
struct RemoveObjectsRequest<'a> {
    prefixes: Vec<&'a str>,
}

#[derive(Deserialize)]
struct RemovedObject {
    name: String,
    id: Option<String>,
    bucket_id: Option<String>,
    owner: Option<String>,
    created_at: Option<String>,
    updated_at: Option<String>,
}

impl From<RemovedObject> for StoredObject {
    fn from(object: RemovedObject) -> Self {
        StoredObject {
            name: object.name,
            id: object.id,
            bucket_id: object.bucket_id,
            owner: object.owner,
            created_at: object.created_at,
            updated_at: object.updated_at,
        }
    }
}

#[derive(Deserialize)]
struct StorageErrorBody {
    error: Option<String>,
    message: Option<String>,
}

/// Bulk object removal through the storage API, using the service role key.
pub struct SupabaseObjectStorage {
    client: SupabaseClient,
}

impl SupabaseObjectStorage {
    pub fn new(client: SupabaseClient) -> Self {
        Self { client }
    }

    fn parse_error(status: reqwest::StatusCode, body: &str) -> StorageError {
        let parsed = serde_json::from_str::<StorageErrorBody>(body).ok();
        let (error, message) = match parsed {
            Some(body) => (body.error, body.message),
            None => (None, None),
        };

        let fallback_message = if body.trim().is_empty() {
            format!("storage request failed with status {}", status)
        } else {
            body.trim().to_string()
        };

        StorageError::Rejected {
            status_code: Some(status.as_u16()),
            error: error.unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("storage_error")
                    .to_string()
            }),
            message: message.unwrap_or(fallback_message),
        }
    }
}

#[async_trait]
impl ObjectStorage for SupabaseObjectStorage {
    async fn remove(
        &self,
        bucket: &str,
        paths: &[StoragePath],
    ) -> Result<Vec<StoredObject>, StorageError> {
        let body = RemoveObjectsRequest {
            prefixes: paths.iter().map(StoragePath::as_str).collect(),
        };

        let response = self
            .client
            .client
            .delete(self.client.bucket_objects_url(bucket))
            .header("apikey", &self.client.service_key)
            .header("Authorization", self.client.auth_header())
            .json(&body)
            .send()
            .await
            .map_err(|e| StorageError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(Self::parse_error(status, &text));
        }

        let removed: Vec<RemovedObject> = response
            .json()
            .await
            .map_err(|e| StorageError::Transport(format!("storage.response_parse_failed: {e}")))?;

        tracing::debug!(
            bucket,
            requested = paths.len(),
            removed = removed.len(),
            "Storage objects removed"
        );

        Ok(removed.into_iter().map(StoredObject::from).collect())
    }
}
