use chrono::Utc;
use tokio::task::JoinHandle;
use tokio::time::{interval, Duration};

use crate::ipc::SnapshotCell;

/// Refresh the snapshot's wall-clock field on its own cadence, independent
/// of the sampling interval.
pub fn spawn_clock_task(snapshots: SnapshotCell, interval_ms: u64) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval(Duration::from_millis(interval_ms));
        loop {
            ticker.tick().await;
            snapshots.update(|snapshot| snapshot.clock = Utc::now());
        }
    })
}
