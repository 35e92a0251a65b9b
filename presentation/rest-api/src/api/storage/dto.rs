use poem_openapi::Object;
use serde::Deserialize;
use serde_json::Value;

use business::domain::storage::errors::StorageError;
use business::domain::storage::model::StoredObject;

/// Read from the raw body so the credential is checked before the payload.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteStorageFileRequest {
    pub file_paths: Option<Value>,
}

impl DeleteStorageFileRequest {
    /// A body that is not a JSON object yields a request without paths.
    pub fn from_slice(bytes: &[u8]) -> Self {
        serde_json::from_slice(bytes).unwrap_or_else(|err| {
            tracing::debug!("Unreadable delete-storage-file body: {err}");
            Self::default()
        })
    }

    /// `None` unless `filePaths` is an array made only of strings.
    pub fn file_paths(&self) -> Option<Vec<String>> {
        let Some(Value::Array(items)) = &self.file_paths else {
            return None;
        };
        items
            .iter()
            .map(|item| item.as_str().map(str::to_string))
            .collect()
    }
}

/// An object removed from storage.
#[derive(Debug, Clone, Object)]
pub struct DeletedFileResponse {
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub id: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub bucket_id: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub owner: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub created_at: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub updated_at: Option<String>,
}

impl From<StoredObject> for DeletedFileResponse {
    fn from(object: StoredObject) -> Self {
        Self {
            name: object.name,
            id: object.id,
            bucket_id: object.bucket_id,
            owner: object.owner,
            created_at: object.created_at,
            updated_at: object.updated_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct DeleteFilesResponse {
    pub success: bool,
    pub deleted_files: Vec<DeletedFileResponse>,
    pub message: String,
}

impl DeleteFilesResponse {
    pub fn from_removed(removed: Vec<StoredObject>) -> Self {
        let message = format!("Successfully deleted {} files", removed.len());
        Self {
            success: true,
            deleted_files: removed.into_iter().map(Into::into).collect(),
            message,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct AccessDeniedResponse {
    pub error: String,
    /// Requested paths that are not under the caller's namespace
    pub invalid_paths: Vec<String>,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct StorageErrorDetails {
    #[oai(skip_serializing_if_is_none)]
    pub status_code: Option<u16>,
    pub error: String,
    pub message: String,
}

#[derive(Debug, Clone, Object)]
pub struct StorageFailureResponse {
    pub error: String,
    pub details: StorageErrorDetails,
}

impl From<StorageError> for StorageFailureResponse {
    fn from(err: StorageError) -> Self {
        let message = err.to_string();
        Self {
            error: message.clone(),
            details: StorageErrorDetails {
                status_code: err.status_code(),
                error: err.kind().to_string(),
                message,
            },
        }
    }
}
