//! Fetch error types.
//!
//! Every variant is recoverable somewhere inside the pipeline; none of them
//! reach the user as an error message.

use std::time::Duration;
use thiserror::Error;

// ============================================================================
// Main Fetch Error
// ============================================================================

/// Error type for fetch operations.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Host-level HTTP error (allowlist, bad URL).
    #[error("Host error: {0}")]
    Host(#[from] HttpError),

    /// A deadline expired before the operation settled.
    #[error("Timed out after {0:?}")]
    Timeout(Duration),

    /// One provider returned a non-success status or unusable body.
    #[error("Provider {source_id} unavailable: {reason}")]
    ProviderUnavailable {
        /// Provider id.
        source_id: String,
        /// What went wrong.
        reason: String,
    },

    /// Every provider in the registry failed.
    #[error("All fact providers failed")]
    AllProvidersExhausted,

    /// Translation could not be produced.
    #[error("Translation unavailable: {0}")]
    TranslationUnavailable(String),

    /// Background image failed to load or decode.
    #[error("Image unavailable: {0}")]
    ImageUnavailable(String),

    /// Invalid response body.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Core error.
    #[error("Core error: {0}")]
    Core(#[from] factcard_core::CoreError),
}

impl FetchError {
    /// Returns true if this error is a deadline expiry.
    pub fn is_timeout(&self) -> bool {
        match self {
            FetchError::Timeout(_) => true,
            FetchError::Http(e) => e.is_timeout(),
            _ => false,
        }
    }
}

// ============================================================================
// HTTP Error
// ============================================================================

/// HTTP-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Request error.
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    /// Domain not allowed.
    #[error("Domain not allowed: {0}")]
    DomainNotAllowed(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}
