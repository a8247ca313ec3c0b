//! Quota tracker integration tests against the on-disk store.

use std::sync::Arc;

use chrono::NaiveDate;
use factcard_store::{COUNT_KEY, DATE_KEY, JsonFileStore, KeyValueStore, QuotaTracker};
use tempfile::TempDir;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
}

#[tokio::test]
async fn counter_never_exceeds_limit_within_a_day() {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(JsonFileStore::new(dir.path().join("quota.json")));
    let quota = QuotaTracker::new(store, 10);

    let mut shown = 0;
    for _ in 0..25 {
        if quota.check_limit_on(day(16)).await.unwrap() {
            quota.increment_count().await.unwrap();
            shown += 1;
        }
    }

    assert_eq!(shown, 10);
    assert_eq!(quota.status_on(day(16)).await.unwrap().count, 10);
}

#[tokio::test]
async fn date_boundary_resets_counter() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("quota.json");
    let store = Arc::new(JsonFileStore::new(&path));
    let quota = QuotaTracker::new(store.clone(), 10);

    for _ in 0..10 {
        assert!(quota.check_limit_on(day(16)).await.unwrap());
        quota.increment_count().await.unwrap();
    }
    assert!(!quota.check_limit_on(day(16)).await.unwrap());

    // Next day: allowed again, counter back at zero.
    assert!(quota.check_limit_on(day(17)).await.unwrap());
    assert_eq!(store.get(COUNT_KEY).await.unwrap().as_deref(), Some("0"));
    assert_eq!(store.get(DATE_KEY).await.unwrap().as_deref(), Some("2026-10-17"));
}

#[tokio::test]
async fn state_survives_a_new_tracker() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("quota.json");

    let first = QuotaTracker::new(Arc::new(JsonFileStore::new(&path)), 2);
    assert!(first.check_limit_on(day(1)).await.unwrap());
    first.increment_count().await.unwrap();
    first.increment_count().await.unwrap();

    let second = QuotaTracker::new(Arc::new(JsonFileStore::new(&path)), 2);
    assert!(!second.check_limit_on(day(1)).await.unwrap());
}
