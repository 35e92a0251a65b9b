use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

#[derive(Object, Debug, Clone, PartialEq)]
pub struct ErrorResponse {
    /// Human readable failure description
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

/// Body for requests poem-openapi could not parse (bad JSON, wrong content type).
pub fn malformed_request(err: poem::Error) -> Json<ErrorResponse> {
    tracing::debug!("Rejected malformed request: {err}");
    Json(ErrorResponse::new(err.to_string()))
}
