use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// Error body shape shared by every endpoint: `{"error": "<message>"}`.
#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub error: String,
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
