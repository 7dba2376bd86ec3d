//! # Request Body Parsing & Validation
//!
//! Provides the [`Validate`] trait for request DTOs and a helper to decode
//! and validate JSON bodies. Bodies are taken as raw bytes so a missing or
//! unusual `Content-Type` header does not change the outcome; any decode
//! failure is a 400 carrying the decoder's message.

use axum::body::Bytes;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Trait for request types that can validate their business rules
/// beyond what serde deserialization checks.
pub trait Validate {
    /// Validate business rules. Returns an error message on failure.
    fn validate(&self) -> Result<(), String>;
}

/// Decode a JSON body, mapping decode errors to [`AppError::BadRequest`].
pub fn parse_json<T: DeserializeOwned>(body: &Bytes) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|err| AppError::BadRequest(err.to_string()))
}

/// Decode a JSON body and validate it using the [`Validate`] trait.
pub fn parse_validated_json<T: DeserializeOwned + Validate>(body: &Bytes) -> Result<T, AppError> {
    let value: T = parse_json(body)?;
    value.validate().map_err(AppError::BadRequest)?;
    Ok(value)
}

/// Parse a path segment as a signed integer the way the routes expect.
pub fn parse_path_int(raw: &str) -> Result<i64, AppError> {
    raw.parse::<i64>()
        .map_err(|_| AppError::BadRequest("please provide a numeric value".to_string()))
}
