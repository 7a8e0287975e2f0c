//! HTTP error types for the folio server.
//!
//! Every error variant produces the JSON envelope the contact form
//! expects: `success: false` plus a human-readable `message`, with a
//! field-level `errors` array for validation failures. Internal detail
//! is logged at the point of failure and never reaches the caller.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use folio_core::FieldViolation;

/// Application-level error returned from HTTP handlers.
#[derive(Debug)]
pub enum ApiError {
    /// The request body was not valid JSON for the expected shape.
    InvalidBody,
    /// One or more form fields violated their constraints.
    Validation(Vec<FieldViolation>),
    /// Storage or other unexpected failure. Detail is already logged;
    /// the caller only sees a generic message.
    Internal,
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<Vec<FieldViolation>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, errors) = match self {
            Self::InvalidBody => (StatusCode::BAD_REQUEST, "Invalid request body", None),
            Self::Validation(violations) => {
                (StatusCode::BAD_REQUEST, "Invalid form data", Some(violations))
            }
            Self::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error",
                None,
            ),
        };

        let body = ErrorBody {
            success: false,
            message,
            errors,
        };

        (status, axum::Json(body)).into_response()
    }
}
