use std::sync::Arc;

use poem::Request;
use poem_openapi::{ApiResponse, OpenApi, payload::Json};

use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse, malformed_request};
use crate::api::product::dto::{DeleteProductRequest, MessageResponse};
use crate::api::security::credential_from_request;
use crate::api::tags::ApiTags;

pub struct ProductApi {
    delete_use_case: Arc<dyn DeleteProductUseCase>,
}

impl ProductApi {
    pub fn new(delete_use_case: Arc<dyn DeleteProductUseCase>) -> Self {
        Self { delete_use_case }
    }
}

/// Product deletion API
#[OpenApi]
impl ProductApi {
    /// Delete a product
    ///
    /// Deletes a product owned by the caller, then removes its images from
    /// storage. A failed image cleanup is logged and does not change the
    /// response; a failed row delete leaves the images untouched.
    #[oai(path = "/delete-product", method = "post", tag = "ApiTags::Products")]
    async fn delete_product(
        &self,
        req: &Request,
        body: Json<DeleteProductRequest>,
    ) -> DeleteProductResponse {
        let params = DeleteProductParams {
            product_id: body.0.product_id(),
            credential: credential_from_request(req),
        };

        match self.delete_use_case.execute(params).await {
            Ok(()) => DeleteProductResponse::Ok(Json(MessageResponse {
                message: "Product deleted successfully".to_string(),
            })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => DeleteProductResponse::Unauthorized(json),
                    403 => DeleteProductResponse::Forbidden(json),
                    404 => DeleteProductResponse::NotFound(json),
                    _ => DeleteProductResponse::BadRequest(json),
                }
            }
        }
    }
}

#[derive(ApiResponse)]
#[oai(bad_request_handler = "delete_product_bad_request")]
pub enum DeleteProductResponse {
    #[oai(status = 200)]
    Ok(Json<MessageResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
}

fn delete_product_bad_request(err: poem::Error) -> DeleteProductResponse {
    DeleteProductResponse::BadRequest(malformed_request(err))
}
