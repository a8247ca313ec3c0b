//! Daily quota tracking.
//!
//! Two keys in a [`KeyValueStore`]: the last visit day (`YYYY-MM-DD`) and
//! the number of facts shown on that day. Both are re-read on every call.
//! A day change resets the counter the next time the limit is checked.

use std::fmt;
use std::sync::Arc;

use chrono::{Local, NaiveDate};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::StoreError;
use crate::kv::KeyValueStore;

/// Key holding the last visit day.
pub const DATE_KEY: &str = "useless_facts_last_visit";

/// Key holding the count for that day.
pub const COUNT_KEY: &str = "useless_facts_daily_count";

/// Facts allowed per calendar day unless configured otherwise.
pub const DEFAULT_DAILY_LIMIT: u32 = 10;

/// Returns today's local calendar day.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Formats a day as a locale-independent `YYYY-MM-DD` string.
pub fn format_day(day: NaiveDate) -> String {
    day.format("%Y-%m-%d").to_string()
}

// ============================================================================
// Quota Status
// ============================================================================

/// A read-only snapshot of the quota.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuotaStatus {
    /// Day the count applies to.
    pub day: String,
    /// Facts shown that day.
    pub count: u32,
    /// Daily limit.
    pub limit: u32,
}

impl QuotaStatus {
    /// Facts left today.
    pub fn remaining(&self) -> u32 {
        self.limit.saturating_sub(self.count)
    }

    /// Returns true if no more facts may be shown today.
    pub fn is_exhausted(&self) -> bool {
        self.count >= self.limit
    }
}

impl fmt::Display for QuotaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} on {}", self.count, self.limit, self.day)
    }
}

// ============================================================================
// Quota Tracker
// ============================================================================

/// Decides whether another fact may be shown today.
#[derive(Clone)]
pub struct QuotaTracker {
    store: Arc<dyn KeyValueStore>,
    daily_limit: u32,
}

impl QuotaTracker {
    /// Creates a tracker over the given store.
    pub fn new(store: Arc<dyn KeyValueStore>, daily_limit: u32) -> Self {
        Self { store, daily_limit }
    }

    /// Returns the configured daily limit.
    pub fn daily_limit(&self) -> u32 {
        self.daily_limit
    }

    /// Checks the limit for today. See [`QuotaTracker::check_limit_on`].
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or written.
    pub async fn check_limit(&self) -> Result<bool, StoreError> {
        self.check_limit_on(today()).await
    }

    /// Returns true if another fact may be shown on `day`.
    ///
    /// If the stored day differs from `day`, the count is reset to zero,
    /// the stored day is updated, and the call allows.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or written.
    pub async fn check_limit_on(&self, day: NaiveDate) -> Result<bool, StoreError> {
        let day = format_day(day);
        let last_visit = self.store.get(DATE_KEY).await?;

        if last_visit.as_deref() != Some(day.as_str()) {
            info!(previous = ?last_visit, today = %day, "New day, resetting quota");
            self.store.set(DATE_KEY, &day).await?;
            self.store.set(COUNT_KEY, "0").await?;
            return Ok(true);
        }

        let count = self.read_count().await?;
        let allowed = count < self.daily_limit;
        debug!(count, limit = self.daily_limit, allowed, "Quota checked");
        Ok(allowed)
    }

    /// Increments today's count and returns the new value.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or written.
    pub async fn increment_count(&self) -> Result<u32, StoreError> {
        let count = self.read_count().await?.saturating_add(1);
        self.store.set(COUNT_KEY, &count.to_string()).await?;
        debug!(count, "Quota incremented");
        Ok(count)
    }

    /// Returns the quota as of today without modifying it.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub async fn status(&self) -> Result<QuotaStatus, StoreError> {
        self.status_on(today()).await
    }

    /// Returns the quota as of `day` without modifying it.
    ///
    /// A stale stored day reads as zero, matching what the next check will do.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub async fn status_on(&self, day: NaiveDate) -> Result<QuotaStatus, StoreError> {
        let day = format_day(day);
        let last_visit = self.store.get(DATE_KEY).await?;
        let count = if last_visit.as_deref() == Some(day.as_str()) {
            self.read_count().await?
        } else {
            0
        };

        Ok(QuotaStatus {
            day,
            count,
            limit: self.daily_limit,
        })
    }

    /// Clears today's count.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    pub async fn reset(&self) -> Result<(), StoreError> {
        self.store.set(DATE_KEY, &format_day(today())).await?;
        self.store.set(COUNT_KEY, "0").await?;
        info!("Quota reset");
        Ok(())
    }

    async fn read_count(&self) -> Result<u32, StoreError> {
        let raw = self.store.get(COUNT_KEY).await?;
        Ok(match raw.as_deref().map(str::parse::<u32>) {
            Some(Ok(count)) => count,
            Some(Err(e)) => {
                warn!(error = %e, "Unreadable quota count, treating as 0");
                0
            }
            None => 0,
        })
    }
}

impl fmt::Debug for QuotaTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuotaTracker")
            .field("daily_limit", &self.daily_limit)
            .finish_non_exhaustive()
    }
}
