use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] database::DbError),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Converts our custom `AppError` into an HTTP response.
///
/// Store and serialization failures are logged in full and masked to a
/// generic 500 so internal details never reach the client. Not-found is
/// handled inline by the handlers (empty 404 body, no error payload).
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Database(db_err) => {
                tracing::error!(error = ?db_err, "Database error.");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal database error occurred".to_string(),
                )
            }
            AppError::Serialization(json_err) => {
                tracing::error!(error = ?json_err, "Serialization error.");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal serialization error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
