use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let status = match &self {
            ProductError::MissingId => StatusCode::BAD_REQUEST,
            ProductError::Unauthenticated => StatusCode::UNAUTHORIZED,
            ProductError::NotFound => StatusCode::NOT_FOUND,
            ProductError::PermissionDenied => StatusCode::FORBIDDEN,
            // Lookup and delete failures keep the 400 contract of this endpoint.
            ProductError::Repository(_) => StatusCode::BAD_REQUEST,
        };

        (status, Json(ErrorResponse::new(self.to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::RepositoryError;

    #[test]
    fn should_map_each_error_to_its_status() {
        let cases = [
            (ProductError::MissingId, 400, "Product ID is required."),
            (ProductError::Unauthenticated, 401, "User not authenticated."),
            (ProductError::NotFound, 404, "Product not found."),
            (
                ProductError::PermissionDenied,
                403,
                "Permission denied. You are not the owner of this product.",
            ),
            (
                ProductError::Repository(RepositoryError::database("timeout")),
                400,
                "timeout",
            ),
        ];

        for (err, status, message) in cases {
            let (actual_status, json) = err.into_error_response();
            assert_eq!(actual_status.as_u16(), status);
            assert_eq!(json.0.error, message);
        }
    }
}
