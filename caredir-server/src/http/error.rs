//! API error types with IntoResponse
//!
//! Responses carry plain-text bodies only. Database failures are logged
//! server-side with the underlying error; the client sees a fixed message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::db::DbError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Required query parameter absent (400)
    MissingParam { message: &'static str },

    /// Database query failed (500, logged)
    Database {
        message: &'static str,
        source: DbError,
    },
}

impl ApiError {
    pub fn missing_param(message: &'static str) -> Self {
        Self::MissingParam { message }
    }

    pub fn database(message: &'static str, source: DbError) -> Self {
        Self::Database { message, source }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingParam { message } => {
                (StatusCode::BAD_REQUEST, message).into_response()
            }
            Self::Database { message, source } => {
                // Log the actual error, return the fixed message
                tracing::error!("{}: {}", message, source);
                (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
            }
        }
    }
}
