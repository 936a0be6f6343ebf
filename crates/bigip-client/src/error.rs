//! BIG-IP client errors

use thiserror::Error;

/// Errors that can occur when interacting with the iControl REST API
#[derive(Debug, Error)]
pub enum BigIpError {
    /// HTTP request/response error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// iControl REST returned an error
    #[error("iControl REST error: {0}")]
    Api(String),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Authentication failed (bad credentials, expired token, unknown login provider)
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid request (e.g., unnamed path used where a name is required)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}
