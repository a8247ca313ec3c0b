//! Background image loading.
//!
//! The load runs on its own task so that a reveal deadline can give up on
//! it without cancelling it. A late image simply settles unobserved.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;
use tracing::{debug, instrument, warn};

use crate::error::FetchError;
use crate::host::http::HttpClient;
use crate::timeout::with_timeout;

/// Base URL of the random image service.
pub const IMAGE_BASE_URL: &str = "https://loremflickr.com";

/// Exclusive upper bound of the `lock` query parameter.
pub const LOCK_RANGE: u32 = 1000;

// ============================================================================
// Image Spec
// ============================================================================

/// Shape of the requested background image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageSpec {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Topic keyword.
    pub topic: String,
}

impl Default for ImageSpec {
    fn default() -> Self {
        Self {
            width: 1080,
            height: 1920,
            topic: "cat".to_string(),
        }
    }
}

impl ImageSpec {
    /// Builds the image URL for a fixed lock value.
    pub fn url_with_lock(&self, lock: u32) -> String {
        format!(
            "{IMAGE_BASE_URL}/{}/{}/{}?lock={lock}",
            self.width, self.height, self.topic
        )
    }

    /// Builds a randomized image URL so each invocation gets a new image.
    pub fn random_url(&self) -> String {
        self.url_with_lock(rand::thread_rng().gen_range(0..LOCK_RANGE))
    }
}

// ============================================================================
// Image API
// ============================================================================

/// A decoded image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedImage {
    /// Where it came from.
    pub url: String,
    /// Decoded width.
    pub width: u32,
    /// Decoded height.
    pub height: u32,
    /// Size of the encoded body.
    pub byte_len: usize,
}

/// Loads and decodes an image.
#[async_trait]
pub trait ImageApi: Send + Sync {
    /// Fetches `url` and decodes it. Readiness means both succeeded.
    async fn load(&self, url: &str) -> Result<LoadedImage, FetchError>;
}

/// [`ImageApi`] over HTTP, decoding with the `image` crate.
#[derive(Debug, Clone)]
pub struct HttpImageLoader {
    http: Arc<HttpClient>,
}

impl HttpImageLoader {
    /// Creates a loader on the given client.
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ImageApi for HttpImageLoader {
    #[instrument(skip(self))]
    async fn load(&self, url: &str) -> Result<LoadedImage, FetchError> {
        let response = self.http.get(url).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::ImageUnavailable(format!("HTTP {status}")));
        }

        let bytes = response.bytes().await?;
        let byte_len = bytes.len();

        // Decoding is CPU-bound; keep it off the executor threads.
        let decoded = tokio::task::spawn_blocking(move || ::image::load_from_memory(&bytes))
            .await
            .map_err(|e| FetchError::ImageUnavailable(e.to_string()))?
            .map_err(|e| FetchError::ImageUnavailable(e.to_string()))?;

        debug!(width = decoded.width(), height = decoded.height(), "Image decoded");

        Ok(LoadedImage {
            url: url.to_string(),
            width: decoded.width(),
            height: decoded.height(),
            byte_len,
        })
    }
}

// ============================================================================
// Image Handle
// ============================================================================

/// An image load in flight.
pub struct ImageHandle {
    url: String,
    task: JoinHandle<Result<LoadedImage, FetchError>>,
}

impl ImageHandle {
    /// Starts loading `url` on a new task.
    pub fn spawn(api: Arc<dyn ImageApi>, url: impl Into<String>) -> Self {
        let url = url.into();
        let task_url = url.clone();
        let task = tokio::spawn(async move { api.load(&task_url).await });
        Self { url, task }
    }

    /// The URL being loaded.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns true once the load has settled (either way).
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Waits at most `limit` for the image.
    ///
    /// On timeout the load task is detached, not aborted.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Timeout`] if the deadline fires first, or the
    /// load's own error.
    pub async fn ready(self, limit: Duration) -> Result<LoadedImage, FetchError> {
        let Self { url, task } = self;
        let result = with_timeout(limit, async move {
            task.await
                .map_err(|e| FetchError::ImageUnavailable(e.to_string()))?
        })
        .await;

        if let Err(ref error) = result {
            warn!(url = %url, error = %error, "Background image not ready");
        }
        result
    }
}

impl std::fmt::Debug for ImageHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageHandle")
            .field("url", &self.url)
            .field("finished", &self.task.is_finished())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
