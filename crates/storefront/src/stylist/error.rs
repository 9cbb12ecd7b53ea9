//! Error types for the stylist API client.
//!
//! These never escape the [`Stylist`](super::Stylist) facade; they exist so
//! the client can report what actually went wrong before the facade maps the
//! failure to display text.

use thiserror::Error;

/// Errors that can occur when calling the Claude Messages API.
#[derive(Debug, Error)]
pub enum StylistError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned an error.
    #[error("API error ({error_type}): {message}")]
    Api {
        /// Error type from the API.
        error_type: String,
        /// Error message.
        message: String,
    },

    /// Failed to parse the response.
    #[error("parse error: {0}")]
    Parse(String),
}

/// API error response envelope.
#[derive(Debug, serde::Deserialize)]
pub struct ApiErrorResponse {
    /// Nested error details.
    pub error: ApiError,
}

/// Nested error details.
#[derive(Debug, serde::Deserialize)]
pub struct ApiError {
    /// Error type.
    #[serde(rename = "type")]
    pub error_type: String,
    /// Error message.
    pub message: String,
}
