//! Fact resolver.
//!
//! Tries sources in registry order, each bounded by the per-provider
//! deadline. The first non-empty text wins and later sources are never
//! touched. If every source fails the resolver draws from the local
//! fallback pool, so resolution always ends with display text.

use std::time::{Duration, Instant};

use factcard_core::{FactResult, FallbackPool};
use tracing::{debug, info, instrument, warn};

use crate::context::FetchContext;
use crate::error::FetchError;
use crate::source::FactSource;
use crate::timeout::with_timeout;

// ============================================================================
// Fact Attempt
// ============================================================================

/// Record of a single source attempt.
#[derive(Debug, Clone)]
pub struct FactAttempt {
    /// The source that was attempted.
    pub source_id: String,
    /// Whether the attempt produced text.
    pub success: bool,
    /// Error if the attempt failed.
    pub error: Option<String>,
    /// How long the attempt took.
    pub duration: Duration,
}

impl FactAttempt {
    /// Creates a successful attempt record.
    pub fn success(source_id: impl Into<String>, duration: Duration) -> Self {
        Self {
            source_id: source_id.into(),
            success: true,
            error: None,
            duration,
        }
    }

    /// Creates a failed attempt record.
    pub fn failure(
        source_id: impl Into<String>,
        error: impl Into<String>,
        duration: Duration,
    ) -> Self {
        Self {
            source_id: source_id.into(),
            success: false,
            error: Some(error.into()),
            duration,
        }
    }
}

// ============================================================================
// Fact Outcome
// ============================================================================

/// The outcome of one resolution.
#[derive(Debug, Clone)]
pub struct FactOutcome {
    /// The fact (remote or local).
    pub result: FactResult,
    /// All attempts made, in order.
    pub attempts: Vec<FactAttempt>,
    /// Total duration.
    pub duration: Duration,
}

impl FactOutcome {
    /// Returns the number of sources that were tried.
    pub fn attempts_count(&self) -> usize {
        self.attempts.len()
    }

    /// Returns all errors that occurred.
    pub fn errors(&self) -> Vec<&str> {
        self.attempts
            .iter()
            .filter_map(|a| a.error.as_deref())
            .collect()
    }
}

// ============================================================================
// Fact Resolver
// ============================================================================

/// Ordered list of sources plus the local fallback pool.
pub struct FactResolver {
    sources: Vec<Box<dyn FactSource>>,
    fallback: FallbackPool,
}

impl FactResolver {
    /// Creates a resolver with no remote sources.
    pub fn new(fallback: FallbackPool) -> Self {
        Self {
            sources: Vec::new(),
            fallback,
        }
    }

    /// Creates a resolver with the given sources, kept in the given order.
    pub fn with_sources(sources: Vec<Box<dyn FactSource>>, fallback: FallbackPool) -> Self {
        Self { sources, fallback }
    }

    /// Appends a source (lowest priority so far).
    pub fn add_source(&mut self, source: Box<dyn FactSource>) {
        self.sources.push(source);
    }

    /// Returns the number of remote sources.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Returns true if there are no remote sources.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Returns source ids in priority order.
    pub fn source_ids(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.id()).collect()
    }

    /// Returns the local fallback pool.
    pub fn fallback_pool(&self) -> &FallbackPool {
        &self.fallback
    }

    /// Draws a local fallback fact.
    pub fn fallback(&self) -> FactResult {
        FactResult::fallback(self.fallback.pick())
    }

    /// Resolves one fact. Never fails.
    #[instrument(skip(self, ctx), fields(sources = self.sources.len()))]
    pub async fn resolve(&self, ctx: &FetchContext) -> FactOutcome {
        let start = Instant::now();
        let (remote, attempts) = self.resolve_remote(ctx).await;

        let result = match remote {
            Ok(result) => result,
            Err(error) => {
                warn!(error = %error, "Using local fallback fact");
                self.fallback()
            }
        };

        FactOutcome {
            result,
            attempts,
            duration: start.elapsed(),
        }
    }

    /// Tries remote sources only.
    ///
    /// Returns [`FetchError::AllProvidersExhausted`] when no source produced
    /// text, for callers that want to apply their own fallback.
    pub async fn resolve_remote(
        &self,
        ctx: &FetchContext,
    ) -> (Result<FactResult, FetchError>, Vec<FactAttempt>) {
        let mut attempts = Vec::with_capacity(self.sources.len());
        let limit = ctx.timeouts().per_provider;

        for source in &self.sources {
            let source_id = source.id();
            let attempt_start = Instant::now();
            debug!(source = %source_id, "Trying fact source");

            match with_timeout(limit, source.fetch(ctx)).await {
                Ok(text) if !text.trim().is_empty() => {
                    let duration = attempt_start.elapsed();
                    info!(source = %source_id, duration = ?duration, "Fact source succeeded");
                    attempts.push(FactAttempt::success(source_id, duration));
                    return (
                        Ok(FactResult::success(text.trim(), source_id)),
                        attempts,
                    );
                }
                Ok(_) => {
                    let duration = attempt_start.elapsed();
                    warn!(source = %source_id, "Fact source returned empty text");
                    attempts.push(FactAttempt::failure(source_id, "empty text", duration));
                }
                Err(error) => {
                    let duration = attempt_start.elapsed();
                    warn!(
                        source = %source_id,
                        error = %error,
                        duration = ?duration,
                        "Fact source failed"
                    );
                    attempts.push(FactAttempt::failure(source_id, error.to_string(), duration));
                }
            }
        }

        warn!("All fact sources failed");
        (Err(FetchError::AllProvidersExhausted), attempts)
    }
}

impl std::fmt::Debug for FactResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FactResolver")
            .field("sources", &self.source_ids())
            .field("fallback", &self.fallback.len())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
