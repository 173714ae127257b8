//! Integration tests for the timespan recheck task lifecycle.
//! The watcher must report status while mounted and fall silent once its
//! owner drops it.

use std::time::Duration;

use chrono::Utc;
use lahora::domain::Interval;
use lahora::state::watcher;

fn spanning_now() -> Interval {
    let start = (Utc::now() - chrono::Duration::minutes(5)).to_rfc3339();
    let end = (Utc::now() + chrono::Duration::minutes(5)).to_rfc3339();
    Interval::new(&start, &end)
}

#[tokio::test]
async fn test_watcher_reports_current_status() {
    let (_handle, mut rx) = watcher::spawn_with_period(spanning_now(), Duration::from_millis(20));

    let first = tokio::time::timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("watcher should tick")
        .expect("channel should be open");
    assert!(first);
}

#[tokio::test]
async fn test_watcher_is_false_outside_the_interval() {
    let interval = Interval::new("2024-01-01T00:00:00Z", "2024-01-01T01:00:00Z");
    let (_handle, mut rx) = watcher::spawn_with_period(interval, Duration::from_millis(20));

    let first = tokio::time::timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("watcher should tick")
        .expect("channel should be open");
    assert!(!first);
}

#[tokio::test]
async fn test_dropping_the_handle_stops_recomputation() {
    let (handle, mut rx) = watcher::spawn_with_period(spanning_now(), Duration::from_millis(10));

    // Let it tick at least once.
    tokio::time::timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("watcher should tick")
        .expect("channel should be open");

    drop(handle);

    // Give the cancellation a moment to land, then drain anything that was
    // already in flight.
    tokio::time::sleep(Duration::from_millis(50)).await;
    while rx.try_recv().is_ok() {}

    // No further status updates may arrive, no matter how long we wait.
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(rx.try_recv().is_err());
}
