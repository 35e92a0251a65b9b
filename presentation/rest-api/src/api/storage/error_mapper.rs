use poem_openapi::payload::Json;

use business::domain::storage::errors::StorageFileError;

use crate::api::error::ErrorResponse;
use crate::api::storage::dto::AccessDeniedResponse;
use crate::api::storage::routes::DeleteStorageFileResponse;

impl From<StorageFileError> for DeleteStorageFileResponse {
    fn from(err: StorageFileError) -> Self {
        match err {
            StorageFileError::MissingCredential | StorageFileError::InvalidCredential => {
                DeleteStorageFileResponse::Unauthorized(Json(ErrorResponse::new(err.to_string())))
            }
            StorageFileError::EmptyPaths => {
                DeleteStorageFileResponse::BadRequest(Json(ErrorResponse::new(err.to_string())))
            }
            StorageFileError::AccessDenied { ref invalid_paths } => {
                DeleteStorageFileResponse::Forbidden(Json(AccessDeniedResponse {
                    error: err.to_string(),
                    invalid_paths: invalid_paths.clone(),
                }))
            }
            // Authorization already passed, so a storage failure is ours.
            StorageFileError::Storage(storage_err) => {
                DeleteStorageFileResponse::InternalError(Json(storage_err.into()))
            }
        }
    }
}
