//! Error types and error handling for the application
//!
//! This module defines custom error types that can be converted to HTTP responses.
//! All errors implement `IntoResponse` to provide consistent error formatting.

use crate::state::PostId;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error types
///
/// Every variant is a client error. The `Display` text is sent to the caller
/// verbatim as the `error` field of the response body.
#[derive(Error, Debug)]
pub enum AppError {
    /// `sort` query value is not a sortable field
    #[error("Invalid sort field. Must be 'title' or 'content'.")]
    InvalidSortField,

    /// `direction` query value is not a sort direction
    #[error("Invalid direction. Must be 'asc' or 'desc'.")]
    InvalidDirection,

    /// Required body fields were absent or empty, in declaration order
    #[error("Missing field(s): {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// Post with the given ID was not found
    #[error("Post with id {0} not found.")]
    PostNotFound(PostId),

    /// Request body or query string could not be decoded
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// No route matches the request path
    #[error("Not found.")]
    RouteNotFound,
}

impl AppError {
    /// HTTP status code this error maps to
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidSortField => StatusCode::BAD_REQUEST,
            AppError::InvalidDirection => StatusCode::BAD_REQUEST,
            AppError::MissingFields(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::PostNotFound(_) => StatusCode::NOT_FOUND,
            AppError::RouteNotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_message = self.to_string();

        tracing::warn!(
            status = %status.as_u16(),
            error = %error_message,
            "Request rejected"
        );

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
