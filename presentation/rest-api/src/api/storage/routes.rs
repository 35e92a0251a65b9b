use std::sync::Arc;

use poem::{Body, Request};
use poem_openapi::{ApiResponse, OpenApi, payload::Json};

use business::domain::storage::use_cases::delete_files::{
    DeleteStorageFilesParams, DeleteStorageFilesUseCase,
};

use crate::api::error::{ErrorResponse, malformed_request};
use crate::api::security::credential_from_request;
use crate::api::storage::dto::{
    AccessDeniedResponse, DeleteFilesResponse, DeleteStorageFileRequest, StorageFailureResponse,
};
use crate::api::tags::ApiTags;

pub struct StorageApi {
    delete_files_use_case: Arc<dyn DeleteStorageFilesUseCase>,
}

impl StorageApi {
    pub fn new(delete_files_use_case: Arc<dyn DeleteStorageFilesUseCase>) -> Self {
        Self {
            delete_files_use_case,
        }
    }
}

/// Raw storage object API
#[OpenApi]
impl StorageApi {
    /// Delete uploaded files
    ///
    /// Removes objects from the product image bucket. Every path must start
    /// with the caller's user id; if any does not, nothing is deleted.
    ///
    /// Body: `{ "filePaths": ["<user id>/<file>", ...] }`. The body is read
    /// only after the caller is authenticated.
    #[oai(
        path = "/delete-storage-file",
        method = "post",
        tag = "ApiTags::Storage"
    )]
    async fn delete_storage_file(
        &self,
        req: &Request,
        body: Body,
    ) -> DeleteStorageFileResponse {
        let body = match body.into_vec().await {
            Ok(bytes) => DeleteStorageFileRequest::from_slice(&bytes),
            Err(err) => {
                tracing::warn!("Failed to read delete-storage-file body: {err}");
                DeleteStorageFileRequest::default()
            }
        };
        let params = DeleteStorageFilesParams {
            credential: credential_from_request(req),
            file_paths: body.file_paths(),
        };

        match self.delete_files_use_case.execute(params).await {
            Ok(removed) => DeleteStorageFileResponse::Ok(Json(DeleteFilesResponse::from_removed(
                removed,
            ))),
            Err(err) => err.into(),
        }
    }
}

#[derive(ApiResponse)]
#[oai(bad_request_handler = "delete_storage_file_bad_request")]
pub enum DeleteStorageFileResponse {
    #[oai(status = 200)]
    Ok(Json<DeleteFilesResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<AccessDeniedResponse>),
    #[oai(status = 500)]
    InternalError(Json<StorageFailureResponse>),
}

fn delete_storage_file_bad_request(err: poem::Error) -> DeleteStorageFileResponse {
    DeleteStorageFileResponse::BadRequest(malformed_request(err))
}
