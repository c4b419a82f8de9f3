//! HTTP error mapping.
//!
//! Every failure a request can hit ends here and becomes exactly one status
//! code with a `{"error": ...}` body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use fruitstand_protocol::{MalformedIdError, ValidationError};
use fruitstand_store::RepositoryError;
use serde::Serialize;
use thiserror::Error;

/// Errors surfaced by the HTTP handlers
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    MalformedId(#[from] MalformedIdError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("No route for {method} {path}")]
    RouteNotFound { method: String, path: String },
}

/// JSON body returned with every error status
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}

impl ApiError {
    /// Status code this error maps to
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::MalformedId(_) => StatusCode::BAD_REQUEST,
            ApiError::Repository(RepositoryError::Conflict { .. }) => StatusCode::CONFLICT,
            ApiError::Repository(RepositoryError::NotFound { .. }) => StatusCode::NOT_FOUND,
            ApiError::Repository(RepositoryError::IdsExhausted) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::RouteNotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    fn body(&self) -> ErrorBody {
        let details = match self {
            ApiError::Validation(err) => err.reasons(),
            _ => Vec::new(),
        };

        ErrorBody {
            error: self.to_string(),
            details,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}
