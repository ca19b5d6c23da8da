//! API errors.

use thiserror::Error;

/// API error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource does not exist.
    #[error("Resource not found: {}", url)]
    NotFound { url: String },

    /// Status code outside of what the endpoint is expected to answer.
    #[error("Unexpected status {} from {}", status, url)]
    UnexpectedStatus { status: u16, url: String },

    #[error(transparent)]
    ImplementationError {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

/// Result alias for `ApiError`.
pub type Result<T, E = ApiError> = core::result::Result<T, E>;
