//! # Error Handling Middleware
//!
//! This module provides a standardized way to handle errors in the
//! availability API. It maps domain-specific errors to appropriate HTTP
//! status codes and JSON error responses, ensuring a consistent error shape
//! across the entire API.
//!
//! The implementation is based on Axum's error handling mechanisms and
//! integrates with the domain error types in `saloon-core`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use saloon_core::errors::SalonError;

/// Application error wrapper that provides HTTP status code mapping.
///
/// `AppError` wraps domain-specific `SalonError` instances and implements
/// `IntoResponse` to convert them into HTTP responses with appropriate
/// status codes and JSON payloads. The booking client shows an empty or
/// error state on any non-2xx response rather than crashing.
#[derive(Debug)]
pub struct AppError(pub SalonError);

/// Converts application errors to HTTP responses.
///
/// Each error variant maps to a status code; the message is rendered into a
/// `{"error": ...}` JSON body.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map error types to HTTP status codes
        let status = match &self.0 {
            SalonError::InvalidTimeOfDay(_) => StatusCode::BAD_REQUEST,
            SalonError::Validation(_) => StatusCode::BAD_REQUEST,
            SalonError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Get the error message and format as JSON
        let message = self.0.to_string();
        let body = Json(json!({ "error": message }));

        // Combine status code and JSON body into a response
        (status, body).into_response()
    }
}

/// Automatic conversion from SalonError to AppError.
///
/// This implementation allows using the `?` operator with functions that
/// return `Result<T, SalonError>` in handler functions that return
/// `Result<T, AppError>`.
impl From<SalonError> for AppError {
    fn from(err: SalonError) -> Self {
        AppError(err)
    }
}
