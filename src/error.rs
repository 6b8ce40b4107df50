//! Error Types
//!
//! Failures of backend calls and form parsing.

use thiserror::Error;

/// Backend call failure
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure (network, CORS, aborted fetch)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Any other non-2xx response
    #[error("Request rejected ({status}): {body}")]
    Rejected { status: u16, body: String },

    /// Response body is not the expected JSON
    #[error("Invalid response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result type for backend calls
pub type ApiResult<T> = Result<T, ApiError>;

/// Form input that cannot become a payload
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("invalid price: {0:?}")]
    InvalidPrice(String),

    #[error("name is required")]
    MissingName,
}
