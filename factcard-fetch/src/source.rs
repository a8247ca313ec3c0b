//! Fact sources.
//!
//! A source is one remote provider. The HTTP implementation evaluates a
//! [`ProviderSpec`] uniformly: GET the endpoint, require a success status,
//! parse JSON, apply the extraction rule.

use async_trait::async_trait;
use factcard_core::ProviderSpec;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::context::FetchContext;
use crate::error::FetchError;

// ============================================================================
// Fact Source Trait
// ============================================================================

/// One remote fact provider.
///
/// ## Implementing a Source
///
/// ```ignore
/// struct FixedSource;
///
/// #[async_trait]
/// impl FactSource for FixedSource {
///     fn id(&self) -> &str {
///         "fixed"
///     }
///
///     async fn fetch(&self, _ctx: &FetchContext) -> Result<String, FetchError> {
///         Ok("Cats have 32 muscles in each ear.".to_string())
///     }
/// }
/// ```
#[async_trait]
pub trait FactSource: Send + Sync {
    /// Unique identifier for this source (e.g. `catfact`).
    fn id(&self) -> &str;

    /// URL this source requests, if it has one.
    fn endpoint(&self) -> Option<&str> {
        None
    }

    /// Fetches one fact.
    ///
    /// Returns non-empty text on success. Any failure (status, network,
    /// body shape, missing field) is an error and the resolver moves on.
    async fn fetch(&self, ctx: &FetchContext) -> Result<String, FetchError>;
}

// ============================================================================
// HTTP Source
// ============================================================================

/// A [`FactSource`] backed by a [`ProviderSpec`].
#[derive(Debug, Clone, Copy)]
pub struct HttpFactSource {
    spec: ProviderSpec,
}

impl HttpFactSource {
    /// Creates a source for the given spec.
    pub fn new(spec: ProviderSpec) -> Self {
        Self { spec }
    }

    /// Returns the underlying spec.
    pub fn spec(&self) -> &ProviderSpec {
        &self.spec
    }

    fn unavailable(&self, reason: impl Into<String>) -> FetchError {
        FetchError::ProviderUnavailable {
            source_id: self.spec.id.to_string(),
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl FactSource for HttpFactSource {
    fn id(&self) -> &str {
        self.spec.id
    }

    fn endpoint(&self) -> Option<&str> {
        Some(self.spec.endpoint)
    }

    #[instrument(skip(self, ctx), fields(source = %self.spec.id))]
    async fn fetch(&self, ctx: &FetchContext) -> Result<String, FetchError> {
        let response = ctx.http.get(self.spec.endpoint).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(self.unavailable(format!("HTTP {status}")));
        }

        let body: Value = response.json().await?;
        debug!("Parsed provider body");

        self.spec
            .extract_text(&body)
            .ok_or_else(|| self.unavailable("no fact in response"))
    }
}
