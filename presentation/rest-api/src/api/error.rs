use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// Error body shared by every endpoint: `{ "error": "<code>" }`. The
/// underlying cause stays in the server-side logs.
#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub error: String,
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
