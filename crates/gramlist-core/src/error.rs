//! Error types for the gramlist client.
//!
//! One unified error type with explicit variants for transport,
//! authentication, API, storage, and input validation failures, so every
//! caller consumes the same shape instead of inventing per-call-site error
//! strings.

use std::fmt;
use thiserror::Error;

/// The unified error type for gramlist operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (connection, timeout, no response received).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Authentication errors (expired or rejected session).
    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    /// Non-2xx API responses that are not session expiry.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Token persistence failures.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Locally rejected input (malformed base URL and the like).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed before a response was received.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// Any other request failure.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// Authentication-related errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// A 401 was observed on an authenticated request; the token store has
    /// already been cleared and the caller must re-authenticate.
    #[error("session expired, log in again")]
    SessionExpired,

    /// An operation that requires a session was attempted without one.
    #[error("not logged in")]
    NotLoggedIn,
}

/// A non-2xx response from the API.
///
/// Carries the server-supplied `message`/`error` field when the body had
/// one; the Display fallback is intentionally generic.
#[derive(Debug)]
pub struct ApiError {
    /// HTTP status code.
    pub status: u16,
    /// Error message from the server, if the body carried one.
    pub message: Option<String>,
}

impl ApiError {
    /// Create a new API error.
    pub fn new(status: u16, message: Option<String>) -> Self {
        Self { status, message }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "HTTP {}: {}", self.status, message),
            None => write!(f, "HTTP {}: API request failed", self.status),
        }
    }
}

impl std::error::Error for ApiError {}

/// Token persistence errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The session file exists but could not be read.
    #[error("failed to read session file: {0}")]
    Read(std::io::Error),

    /// The session file could not be written.
    #[error("failed to write session file: {0}")]
    Write(std::io::Error),

    /// The session file exists but does not parse.
    #[error("malformed session file: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid API base URL.
    #[error("invalid API base URL '{value}': {reason}")]
    ApiUrl { value: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_uses_server_message() {
        let err = ApiError::new(400, Some("Email already exists".to_string()));
        assert_eq!(err.to_string(), "HTTP 400: Email already exists");
    }

    #[test]
    fn api_error_falls_back_to_generic_message() {
        let err = ApiError::new(500, None);
        assert_eq!(err.to_string(), "HTTP 500: API request failed");
    }
}
