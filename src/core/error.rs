//! Typed errors for the order service
//!
//! Every failure a handler can produce is an [`OrderError`] variant, and each
//! variant maps to exactly one HTTP status:
//!
//! | variant | status | body |
//! |---|---|---|
//! | [`OrderError::Validation`] | 400 | JSON array of `"field: message"` |
//! | [`OrderError::NotFound`] | 404 | empty |
//! | [`OrderError::InvalidId`] | 400 | [`ErrorResponse`] |
//! | [`OrderError::InvalidBody`] | 400 | [`ErrorResponse`] |
//! | [`OrderError::UnsupportedMediaType`] | 415 | [`ErrorResponse`] |
//! | [`OrderError::Storage`] | 500 | [`ErrorResponse`] |
//!
//! # Example
//!
//! ```rust,ignore
//! async fn load(repo: &dyn OrderRepository, id: i64) -> OrderResult<Order> {
//!     repo.find_by_id(id)
//!         .await
//!         .map_err(|e| OrderError::storage("find", e))?
//!         .ok_or(OrderError::NotFound { id })
//! }
//! ```

use crate::core::validation::{Violation, describe};
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    /// The payload broke one or more field rules
    #[error("order validation failed: {}", describe(.0))]
    Validation(Vec<Violation>),

    /// No order is stored under this id
    #[error("order with id '{id}' not found")]
    NotFound { id: i64 },

    /// The path segment is not an integer id
    #[error("invalid order id: '{raw}'")]
    InvalidId { raw: String },

    /// The body is not JSON or does not have the order shape
    #[error("invalid request body: {message}")]
    InvalidBody { message: String },

    /// The body was not sent as `application/json`
    #[error("unsupported media type: {message}")]
    UnsupportedMediaType { message: String },

    /// The repository failed
    #[error("failed to {operation} order: {message}")]
    Storage { operation: String, message: String },
}

/// Error body for statuses that carry one
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl OrderError {
    /// Wrap a repository failure, logging it
    pub fn storage(operation: &str, err: anyhow::Error) -> Self {
        tracing::error!(operation, error = %err, "order repository failure");
        OrderError::Storage {
            operation: operation.to_string(),
            message: err.to_string(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            OrderError::Validation(_) => StatusCode::BAD_REQUEST,
            OrderError::NotFound { .. } => StatusCode::NOT_FOUND,
            OrderError::InvalidId { .. } => StatusCode::BAD_REQUEST,
            OrderError::InvalidBody { .. } => StatusCode::BAD_REQUEST,
            OrderError::UnsupportedMediaType { .. } => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            OrderError::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            OrderError::Validation(_) => "VALIDATION_ERROR",
            OrderError::NotFound { .. } => "ORDER_NOT_FOUND",
            OrderError::InvalidId { .. } => "INVALID_ORDER_ID",
            OrderError::InvalidBody { .. } => "INVALID_BODY",
            OrderError::UnsupportedMediaType { .. } => "UNSUPPORTED_MEDIA_TYPE",
            OrderError::Storage { .. } => "STORAGE_ERROR",
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
        }
    }
}

impl IntoResponse for OrderError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            OrderError::Validation(violations) => {
                let lines: Vec<String> = violations.iter().map(ToString::to_string).collect();
                (status, Json(lines)).into_response()
            }
            OrderError::NotFound { .. } => status.into_response(),
            other => (status, Json(other.to_response())).into_response(),
        }
    }
}

/// Result type for handler-level order operations
pub type OrderResult<T> = Result<T, OrderError>;
