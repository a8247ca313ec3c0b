//! Fetch-with-timeout.
//!
//! Per-provider requests, the resolve deadline, the translation limit and
//! the image reveal wait all go through [`with_timeout`].

use std::future::Future;
use std::time::Duration;

use tracing::debug;

use crate::error::FetchError;

/// Races `operation` against a timer of length `limit`.
///
/// If the operation settles first its outcome (value or error) is returned
/// unchanged. If the timer fires first the call fails with
/// [`FetchError::Timeout`] and the operation is dropped. Work that was moved
/// onto its own task (see [`crate::image::ImageHandle`]) keeps running and
/// settles silently.
///
/// # Errors
///
/// Returns the operation's own error, or [`FetchError::Timeout`].
pub async fn with_timeout<F, T>(limit: Duration, operation: F) -> Result<T, FetchError>
where
    F: Future<Output = Result<T, FetchError>>,
{
    if let Ok(outcome) = tokio::time::timeout(limit, operation).await {
        outcome
    } else {
        debug!(limit = ?limit, "Deadline expired");
        Err(FetchError::Timeout(limit))
    }
}
