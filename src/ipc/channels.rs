use crossbeam::channel::{bounded, Receiver, Sender};
use std::sync::Arc;

use crate::evaluator::Snapshot;

/// Push channel carrying each new snapshot to a rendering layer or any other
/// push-style consumer.
#[derive(Clone)]
pub struct DashboardChannels {
    pub snapshot_tx: Sender<Snapshot>,
    pub snapshot_rx: Arc<Receiver<Snapshot>>,
}

impl DashboardChannels {
    pub fn new(buffer_size: usize) -> Self {
        let (snapshot_tx, snapshot_rx) = bounded(buffer_size);
        Self {
            snapshot_tx,
            snapshot_rx: Arc::new(snapshot_rx),
        }
    }

    /// Non-blocking publish. When no consumer keeps up the snapshot is
    /// dropped; the shared cell still holds the latest value.
    pub fn publish(&self, snapshot: Snapshot) {
        let _ = self.snapshot_tx.try_send(snapshot);
    }
}
