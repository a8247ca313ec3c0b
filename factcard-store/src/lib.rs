// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # `FactCard` Store
//!
//! Everything that outlives a single invocation.
//!
//! This crate provides:
//!
//! - **`KeyValueStore`**: String key/value persistence (JSON file or memory)
//! - **`QuotaTracker`**: The daily cap, keyed by calendar day
//! - **`SettingsStore`**: User preferences with persistence
//! - **Persistence**: File I/O helpers for JSON data
//!
//! ## Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use factcard_store::{JsonFileStore, QuotaTracker, SettingsStore};
//!
//! let settings = SettingsStore::load_default().await?;
//! let store = Arc::new(JsonFileStore::new(default_quota_path()));
//! let quota = QuotaTracker::new(store, settings.get().await.daily_limit);
//!
//! if quota.check_limit().await? {
//!     // show a fact, then
//!     quota.increment_count().await?;
//! }
//! ```

pub mod error;
pub mod kv;
pub mod persistence;
pub mod quota;
pub mod settings_store;

pub use error::StoreError;
pub use kv::{JsonFileStore, KeyValueStore, MemoryStore};
pub use persistence::{
    default_config_dir, default_data_dir, default_quota_path, default_settings_path, load_json,
    load_json_or_default, save_json,
};
pub use quota::{
    COUNT_KEY, DATE_KEY, DEFAULT_DAILY_LIMIT, QuotaStatus, QuotaTracker, format_day, today,
};
pub use settings_store::{
    DisplaySettings, LogLevel, Settings, SettingsStore, TimeoutSettings,
};

#[cfg(test)]
mod persistence_tests;
