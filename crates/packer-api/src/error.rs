//! # API Error Types
//!
//! Structured error type implementing `axum::response::IntoResponse`.
//! Maps validation, order, and registry failures to HTTP status codes.
//! Every error body has the same flat shape: `{"error": "<message>"}`.
//! Server-side causes are logged, never returned to the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use packer_registry::RegistryError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::service::OrderError;

/// Client-facing message for every 500 response.
pub const GENERIC_ERROR: &str = "an error has occurred";

/// JSON error response body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable error message.
    pub error: String,
}

/// Application-level error type that implements [`IntoResponse`] for Axum.
#[derive(Error, Debug)]
pub enum AppError {
    /// Malformed or out-of-range request input (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Internal server error (500). Message is logged but not returned to client.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Return the HTTP status code for this error.
    fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the response body.
    fn public_message(&self) -> String {
        match self {
            Self::BadRequest(msg) => msg.clone(),
            Self::Internal(_) => GENERIC_ERROR.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            Self::Internal(_) => tracing::error!(error = %self, "internal server error"),
            Self::BadRequest(_) => tracing::debug!(error = %self, "rejected request"),
        }

        let body = ErrorBody {
            error: self.public_message(),
        };

        (status, Json(body)).into_response()
    }
}

/// Order failures are client errors.
impl From<OrderError> for AppError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::InvalidQuantity(_) => {
                Self::BadRequest("please provide a number greater than zero".to_string())
            }
            OrderError::EmptyCatalogue => {
                Self::BadRequest("you must first add some packaging sizes".to_string())
            }
        }
    }
}

/// Registry failures surface as a generic 500, including a missing size on delete.
impl From<RegistryError> for AppError {
    fn from(err: RegistryError) -> Self {
        Self::Internal(err.to_string())
    }
}
