//! Error types for the task API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently
//! distinguish "the task does not exist" from "the server returned an
//! unexpected status." Every other non-2xx response lands in `HttpError`
//! with the raw status code and body, which for this API carries the
//! server's `{"error": message}` payload.

use std::fmt;

/// Errors returned by `TaskClient` parse methods.
#[derive(Debug)]
pub enum ApiError {
    /// The server returned 404 — the requested task does not exist.
    NotFound,

    /// The server returned a non-2xx status other than 404.
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    SerializationError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound => write!(f, "task not found"),
            ApiError::HttpError { status, body } => {
                write!(f, "HTTP {status}: {body}")
            }
            ApiError::DeserializationError(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
            ApiError::SerializationError(msg) => {
                write!(f, "serialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for ApiError {}
