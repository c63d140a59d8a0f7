//! # Error Handling Middleware
//!
//! Maps domain errors to HTTP responses so every handler surfaces
//! failures the same way.
//!
//! One mapping is deliberately unusual: authorization failures do not
//! return 403. A non-admin hitting an admin route is bounced back to the
//! landing page with a 303 redirect instead of a denial status.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use nobat_core::errors::NobatError;
use serde_json::json;

/// Application error wrapper that provides HTTP response mapping.
///
/// `AppError` wraps domain-specific `NobatError` instances and implements
/// `IntoResponse` so handlers can return `Result<_, AppError>` and use
/// the `?` operator throughout.
#[derive(Debug)]
pub struct AppError(pub NobatError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map error types to HTTP status codes. Authorization failures
        // are a soft redirect, not a denial status.
        let status = match &self.0 {
            NobatError::Authorization(_) => return Redirect::to("/").into_response(),
            NobatError::NotFound(_) => StatusCode::NOT_FOUND,
            NobatError::Validation(_) => StatusCode::BAD_REQUEST,
            NobatError::Authentication(_) => StatusCode::UNAUTHORIZED,
            NobatError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            NobatError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Get the error message and format as JSON
        let message = self.0.to_string();
        let body = Json(json!({ "error": message }));

        // Combine status code and JSON body into a response
        (status, body).into_response()
    }
}

/// Automatic conversion from NobatError to AppError, enabling `?` in
/// handlers over functions that return `Result<T, NobatError>`.
impl From<NobatError> for AppError {
    fn from(err: NobatError) -> Self {
        AppError(err)
    }
}

/// Automatic conversion from eyre::Report to AppError, wrapping the
/// report in `NobatError::Database`.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(NobatError::Database(err))
    }
}

/// Maps a NobatError to an HTTP response directly.
pub fn map_error(err: NobatError) -> Response {
    AppError(err).into_response()
}
