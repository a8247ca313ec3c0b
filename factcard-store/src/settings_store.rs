//! User preferences store.
//!
//! One JSON file holds the widget's whole configuration: the daily limit,
//! the three deadlines, slot order, reveal strategy, and the image shape.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use factcard_core::{DisplayOrder, DisplayPolicy, RevealStrategy, Timeouts};
use factcard_fetch::{FetchSettings, ImageSpec};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::error::StoreError;
use crate::persistence::{default_settings_path, load_json, save_json};
use crate::quota::DEFAULT_DAILY_LIMIT;

// ============================================================================
// Settings Types
// ============================================================================

/// User preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Facts allowed per calendar day.
    pub daily_limit: u32,

    /// Pipeline deadlines.
    pub timeouts: TimeoutSettings,

    /// Slot order.
    pub display: DisplaySettings,

    /// Text/image reveal ordering.
    pub reveal_strategy: RevealStrategy,

    /// Translation target language code.
    pub target_language: String,

    /// Background image shape.
    pub image: ImageSpec,

    /// Provider ids to skip.
    pub disabled_sources: Vec<String>,

    /// Log level.
    pub log_level: LogLevel,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            daily_limit: DEFAULT_DAILY_LIMIT,
            timeouts: TimeoutSettings::default(),
            display: DisplaySettings::default(),
            reveal_strategy: RevealStrategy::default(),
            target_language: "es".to_string(),
            image: ImageSpec::default(),
            disabled_sources: Vec::new(),
            log_level: LogLevel::default(),
        }
    }
}

impl Settings {
    /// Checks that the settings can drive a widget.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Config`] describing the first invalid field.
    pub fn validate(&self) -> Result<(), StoreError> {
        let t = &self.timeouts;
        if t.per_provider_ms == 0 || t.pipeline_ms == 0 || t.image_reveal_ms == 0 {
            return Err(StoreError::Config("timeouts must be positive".to_string()));
        }
        if self.target_language.trim().is_empty() {
            return Err(StoreError::Config("target_language is empty".to_string()));
        }
        if self.image.width == 0 || self.image.height == 0 {
            return Err(StoreError::Config("image dimensions must be positive".to_string()));
        }
        Ok(())
    }

    /// Converts the stored deadlines.
    pub fn timeouts(&self) -> Timeouts {
        self.timeouts.into()
    }

    /// Builds the display policy (labels keep their defaults).
    pub fn to_policy(&self) -> DisplayPolicy {
        DisplayPolicy::default()
            .with_order(DisplayOrder {
                primary_is_translated: self.display.primary_is_translated,
            })
            .with_reveal(self.reveal_strategy)
            .with_timeouts(self.timeouts())
    }

    /// Builds the fetch settings.
    pub fn to_fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            timeouts: self.timeouts(),
            target_language: self.target_language.clone(),
            image: self.image.clone(),
            ..FetchSettings::default()
        }
    }

    /// Returns true if the provider id is disabled.
    pub fn is_source_disabled(&self, id: &str) -> bool {
        self.disabled_sources.iter().any(|s| s == id)
    }
}

/// Deadlines in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeoutSettings {
    /// Single provider request.
    pub per_provider_ms: u64,
    /// Resolve plus translate.
    pub pipeline_ms: u64,
    /// Image wait at reveal.
    pub image_reveal_ms: u64,
}

impl Default for TimeoutSettings {
    fn default() -> Self {
        Self {
            per_provider_ms: 3000,
            pipeline_ms: 8000,
            image_reveal_ms: 1000,
        }
    }
}

impl From<TimeoutSettings> for Timeouts {
    fn from(t: TimeoutSettings) -> Self {
        Timeouts {
            per_provider: Duration::from_millis(t.per_provider_ms),
            pipeline: Duration::from_millis(t.pipeline_ms),
            image_reveal: Duration::from_millis(t.image_reveal_ms),
        }
    }
}

/// Slot order preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Translated text in the primary slot.
    pub primary_is_translated: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            primary_is_translated: true,
        }
    }
}

/// Log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Error level logging.
    Error,
    /// Warning level logging.
    #[default]
    Warn,
    /// Info level logging.
    Info,
    /// Debug level logging.
    Debug,
    /// Trace level logging.
    Trace,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}

// ============================================================================
// Settings Store
// ============================================================================

/// Persistent settings store.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    settings: Arc<RwLock<Settings>>,
    path: PathBuf,
}

impl SettingsStore {
    /// Creates a store holding defaults, backed by `path`.
    pub fn new(path: PathBuf) -> Self {
        Self {
            settings: Arc::new(RwLock::new(Settings::default())),
            path,
        }
    }

    /// Loads settings from the default path.
    ///
    /// # Errors
    ///
    /// Returns error if settings cannot be loaded from disk.
    pub async fn load_default() -> Result<Self, StoreError> {
        Self::load(default_settings_path()).await
    }

    /// Loads settings from a path.
    ///
    /// A missing file yields defaults. An unreadable or invalid file is
    /// logged and also yields defaults.
    ///
    /// # Errors
    ///
    /// Currently infallible; kept fallible for symmetry with [`Self::save`].
    pub async fn load(path: PathBuf) -> Result<Self, StoreError> {
        let settings = if path.exists() {
            info!(path = %path.display(), "Loading settings");
            match load_json::<Settings>(&path).await {
                Ok(settings) => match settings.validate() {
                    Ok(()) => settings,
                    Err(e) => {
                        warn!(error = %e, "Invalid settings, using defaults");
                        Settings::default()
                    }
                },
                Err(e) => {
                    warn!(error = %e, "Failed to load settings, using defaults");
                    Settings::default()
                }
            }
        } else {
            debug!(path = %path.display(), "Settings file not found, using defaults");
            Settings::default()
        };

        Ok(Self {
            settings: Arc::new(RwLock::new(settings)),
            path,
        })
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Gets a copy of the current settings.
    pub async fn get(&self) -> Settings {
        self.settings.read().await.clone()
    }

    /// Updates settings in memory.
    pub async fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut Settings),
    {
        let mut settings = self.settings.write().await;
        f(&mut settings);
    }

    /// Restores defaults in memory.
    pub async fn reset(&self) {
        *self.settings.write().await = Settings::default();
    }

    /// Saves settings to disk.
    ///
    /// # Errors
    ///
    /// Returns error if settings are invalid or cannot be written to disk.
    pub async fn save(&self) -> Result<(), StoreError> {
        let settings = self.settings.read().await;
        settings.validate()?;
        save_json(&self.path, &*settings).await?;
        info!(path = %self.path.display(), "Settings saved");
        Ok(())
    }
}
