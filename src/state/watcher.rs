//! Periodic "happening now" recheck task.
//!
//! Each mounted timespan view owns one watcher. The task re-evaluates the
//! interval on a fixed cadence and reports over an mpsc channel drained by
//! the view's per-frame poll. Cancellation is mandatory: dropping the
//! handle cancels the token and aborts the task, so no recheck can outlive
//! its owner.

use std::time::Duration;

use chrono::Utc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::domain::Interval;

/// How often a mounted timespan re-evaluates its current status.
pub const RECHECK_PERIOD: Duration = Duration::from_secs(5);

/// Owner handle for a running recheck task.
pub struct WatcherHandle {
    token: CancellationToken,
    task: JoinHandle<()>,
}

impl Drop for WatcherHandle {
    fn drop(&mut self) {
        self.token.cancel();
        self.task.abort();
    }
}

/// Spawn the recheck task for `interval` at the standard cadence.
pub fn spawn(interval: Interval) -> (WatcherHandle, mpsc::Receiver<bool>) {
    spawn_with_period(interval, RECHECK_PERIOD)
}

/// Like [`spawn`] but with a custom cadence. Exposed for tests that cannot
/// wait out the real period.
pub fn spawn_with_period(
    interval: Interval,
    period: Duration,
) -> (WatcherHandle, mpsc::Receiver<bool>) {
    let (tx, rx) = mpsc::channel(8);
    let token = CancellationToken::new();
    let child = token.clone();
    let task = crate::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        loop {
            tokio::select! {
                _ = child.cancelled() => break,
                _ = ticker.tick() => {
                    if tx.send(interval.contains(Utc::now())).await.is_err() {
                        break;
                    }
                }
            }
        }
    });
    (WatcherHandle { token, task }, rx)
}
