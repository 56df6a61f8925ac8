//! Error types for the description suggestion client.

use thiserror::Error;

/// Errors that can occur when requesting a suggestion.
///
/// None of these reach the caller of
/// [`DescriptionSuggester::suggest`](super::DescriptionSuggester::suggest);
/// they are logged and replaced by the fallback text.
#[derive(Debug, Error)]
pub enum SuggestionError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned an error.
    #[error("API error ({status}): {message}")]
    Api {
        /// Status from the error body, or the HTTP status.
        status: String,
        /// Error message.
        message: String,
    },

    /// Rate limited by the API.
    #[error("rate limited, retry after {0} seconds")]
    RateLimited(u64),

    /// Authentication failed.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Failed to parse response.
    #[error("parse error: {0}")]
    Parse(String),

    /// No API key is configured.
    #[error("no API key configured")]
    MissingApiKey,

    /// The configured base URL cannot address the endpoint.
    #[error("invalid endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
}

/// Error body returned by the Generative Language API.
#[derive(Debug, serde::Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiError,
}

/// Nested error details.
#[derive(Debug, serde::Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub code: u16,
    pub message: String,
    #[serde(default)]
    pub status: String,
}
