//! Fetch context shared by every network-facing component.

use std::sync::Arc;

use factcard_core::Timeouts;

use crate::host::http::HttpClient;
use crate::image::ImageSpec;
use crate::translate::GOOGLE_TRANSLATE_URL;

// ============================================================================
// Fetch Settings
// ============================================================================

/// Settings for fetch operations.
#[derive(Debug, Clone)]
pub struct FetchSettings {
    /// Pipeline deadlines.
    pub timeouts: Timeouts,
    /// Target language code for translation (e.g. `es`).
    pub target_language: String,
    /// Translation endpoint.
    pub translate_url: String,
    /// Background image request shape.
    pub image: ImageSpec,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            timeouts: Timeouts::default(),
            target_language: "es".to_string(),
            translate_url: GOOGLE_TRANSLATE_URL.to_string(),
            image: ImageSpec::default(),
        }
    }
}

impl FetchSettings {
    /// Returns settings with the given timeouts.
    pub fn with_timeouts(mut self, timeouts: Timeouts) -> Self {
        self.timeouts = timeouts;
        self
    }
}

// ============================================================================
// Fetch Context
// ============================================================================

/// Context provided to fact sources and the resolver.
pub struct FetchContext {
    /// HTTP client with tracing.
    pub http: Arc<HttpClient>,
    /// Fetch settings.
    pub settings: FetchSettings,
}

impl FetchContext {
    /// Creates a new fetch context with default settings.
    pub fn new() -> Self {
        Self::with_settings(FetchSettings::default())
    }

    /// Creates a context with custom settings.
    pub fn with_settings(settings: FetchSettings) -> Self {
        Self {
            http: Arc::new(HttpClient::new()),
            settings,
        }
    }

    /// Creates a builder for customizing the context.
    pub fn builder() -> FetchContextBuilder {
        FetchContextBuilder::new()
    }

    /// Returns the pipeline deadlines.
    pub fn timeouts(&self) -> Timeouts {
        self.settings.timeouts
    }
}

impl Default for FetchContext {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FetchContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchContext")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Fetch Context Builder
// ============================================================================

/// Builder for constructing a `FetchContext`.
pub struct FetchContextBuilder {
    http: Option<Arc<HttpClient>>,
    settings: FetchSettings,
}

impl FetchContextBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self {
            http: None,
            settings: FetchSettings::default(),
        }
    }

    /// Sets the HTTP client.
    pub fn http(mut self, http: Arc<HttpClient>) -> Self {
        self.http = Some(http);
        self
    }

    /// Sets the fetch settings.
    pub fn settings(mut self, settings: FetchSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Sets the timeouts.
    pub fn timeouts(mut self, timeouts: Timeouts) -> Self {
        self.settings.timeouts = timeouts;
        self
    }

    /// Sets the translation target language.
    pub fn target_language(mut self, language: impl Into<String>) -> Self {
        self.settings.target_language = language.into();
        self
    }

    /// Builds the fetch context.
    pub fn build(self) -> FetchContext {
        FetchContext {
            http: self.http.unwrap_or_else(|| Arc::new(HttpClient::new())),
            settings: self.settings,
        }
    }
}

impl Default for FetchContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_context_builder() {
        let timeouts = Timeouts {
            per_provider: Duration::from_millis(500),
            ..Timeouts::default()
        };
        let ctx = FetchContext::builder()
            .timeouts(timeouts)
            .target_language("fr")
            .build();

        assert_eq!(ctx.timeouts().per_provider, Duration::from_millis(500));
        assert_eq!(ctx.settings.target_language, "fr");
    }

    #[test]
    fn test_default_context() {
        let ctx = FetchContext::new();
        assert_eq!(ctx.timeouts(), Timeouts::default());
        assert_eq!(ctx.settings.target_language, "es");
    }
}
