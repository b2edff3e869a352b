//! Error types for the nectar API client

use thiserror::Error;

/// Errors that can occur when calling the search API
///
/// This is the whole failure taxonomy of the service layer: transport,
/// status, decode. Every variant is produced at the point of occurrence and
/// returned - a service call never panics and never leaks a raw `reqwest`
/// error across the boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network-level failure before a response was received
    #[error("Request failed: {0}")]
    Transport(String),

    /// Unauthorized - missing or expired session token
    #[error("Unauthorized - missing or expired token")]
    Unauthorized,

    /// API returned a non-success status
    #[error("API error (status {status}): {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, when one could be read
        body: String,
    },

    /// Response body did not decode to the expected shape
    #[error("Response parsing failed: {0}")]
    Decode(String),
}
