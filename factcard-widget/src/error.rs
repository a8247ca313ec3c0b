//! Widget construction errors.

use thiserror::Error;

/// Errors raised while assembling a widget. Invocations never fail.
#[derive(Debug, Error)]
pub enum WidgetError {
    /// Core error (e.g. an empty fallback pool).
    #[error("Core error: {0}")]
    Core(#[from] factcard_core::CoreError),

    /// Store error.
    #[error("Store error: {0}")]
    Store(#[from] factcard_store::StoreError),
}
