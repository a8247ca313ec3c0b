//! Best-effort translation.
//!
//! Translation never fails from the caller's point of view: any problem
//! (network, status, body shape) is logged and yields an empty string,
//! which the display layer replaces with a placeholder.

use std::sync::Arc;

use async_trait::async_trait;
use factcard_core::TranslationResult;
use serde_json::Value;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::context::FetchContext;
use crate::error::FetchError;
use crate::host::http::HttpClient;

/// Public Google Translate endpoint used by the web widget.
pub const GOOGLE_TRANSLATE_URL: &str = "https://translate.googleapis.com/translate_a/single";

// ============================================================================
// Translate API
// ============================================================================

/// Translates fact text into the configured target language.
#[async_trait]
pub trait TranslateApi: Send + Sync {
    /// Returns the translation, or an empty string if none could be produced.
    async fn translate(&self, text: &str) -> TranslationResult;
}

// ============================================================================
// Google Translator
// ============================================================================

/// [`TranslateApi`] backed by the public `translate_a/single` endpoint.
#[derive(Debug, Clone)]
pub struct GoogleTranslator {
    http: Arc<HttpClient>,
    target_language: String,
    base_url: String,
}

impl GoogleTranslator {
    /// Creates a translator for the given target language.
    pub fn new(http: Arc<HttpClient>, target_language: impl Into<String>) -> Self {
        Self {
            http,
            target_language: target_language.into(),
            base_url: GOOGLE_TRANSLATE_URL.to_string(),
        }
    }

    /// Creates a translator sharing the context's client, language and
    /// endpoint.
    pub fn from_context(ctx: &FetchContext) -> Self {
        Self::new(Arc::clone(&ctx.http), ctx.settings.target_language.clone())
            .with_base_url(ctx.settings.translate_url.clone())
    }

    /// Overrides the endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Builds the request URL for `text`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidResponse`] if the base URL is malformed.
    pub fn request_url(&self, text: &str) -> Result<Url, FetchError> {
        Url::parse_with_params(
            &self.base_url,
            &[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", self.target_language.as_str()),
                ("dt", "t"),
                ("q", text),
            ],
        )
        .map_err(|e| FetchError::InvalidResponse(format!("bad translate URL: {e}")))
    }

    /// Like [`TranslateApi::translate`] but reports why translation failed.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::TranslationUnavailable`] for unusable bodies,
    /// or the underlying HTTP error.
    pub async fn try_translate(&self, text: &str) -> Result<String, FetchError> {
        let url = self.request_url(text)?;
        let response = self.http.get(url.as_str()).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::TranslationUnavailable(format!("HTTP {status}")));
        }

        let body = response.text().await?;
        parse_translation(&body)
            .ok_or_else(|| FetchError::TranslationUnavailable("unexpected body".to_string()))
    }
}

#[async_trait]
impl TranslateApi for GoogleTranslator {
    #[instrument(skip(self, text), fields(lang = %self.target_language))]
    async fn translate(&self, text: &str) -> TranslationResult {
        if text.trim().is_empty() {
            return String::new();
        }

        match self.try_translate(text).await {
            Ok(translated) => {
                debug!(chars = translated.chars().count(), "Translated");
                translated
            }
            Err(error) => {
                warn!(error = %error, "Translation failed");
                String::new()
            }
        }
    }
}

// ============================================================================
// Response Parsing
// ============================================================================

/// Parses a raw `translate_a/single` body.
///
/// The body is a nested array whose first element lists translated
/// segments. Returns `None` if the body is not JSON or has another shape.
pub fn parse_translation(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    join_segments(value.get(0)?)
}

/// Concatenates the first string of every segment, in order.
///
/// Segments whose first element is not a string are skipped. An empty
/// result counts as absent.
pub fn join_segments(segments: &Value) -> Option<String> {
    let joined: String = segments
        .as_array()?
        .iter()
        .filter_map(|segment| segment.get(0)?.as_str())
        .collect();

    if joined.trim().is_empty() {
        None
    } else {
        Some(joined)
    }
}
