use parking_lot::{Mutex, RwLock};
use std::collections::VecDeque;
use std::sync::Arc;

use crate::config::{ConfigError, DashboardConfig};
use crate::evaluator::Snapshot;

// ============================================================================
// SNAPSHOT CELL - Single mutator, many readers
// ============================================================================

/// Shared cell holding the latest snapshot. Written only by the sampling and
/// clock tasks; read by any number of consumers. Last writer wins.
#[derive(Clone)]
pub struct SnapshotCell {
    data: Arc<RwLock<Snapshot>>,
}

impl SnapshotCell {
    pub fn new(initial: Snapshot) -> Self {
        Self {
            data: Arc::new(RwLock::new(initial)),
        }
    }

    pub fn store(&self, snapshot: Snapshot) {
        *self.data.write() = snapshot;
    }

    pub fn load(&self) -> Snapshot {
        self.data.read().clone()
    }

    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut Snapshot),
    {
        let mut snapshot = self.data.write();
        f(&mut snapshot);
    }
}

// ============================================================================
// EVENT LOG - Bounded ring of human-readable events
// ============================================================================

/// Anomaly alerts and link transitions, newest last. Oldest entries are
/// evicted once `max_size` is reached.
#[derive(Clone)]
pub struct EventLog {
    entries: Arc<RwLock<VecDeque<String>>>,
    max_size: usize,
}

impl EventLog {
    pub fn new(max_size: usize) -> Self {
        Self {
            entries: Arc::new(RwLock::new(VecDeque::with_capacity(max_size))),
            max_size,
        }
    }

    pub fn write(&self, message: String) {
        let mut log = self.entries.write();
        log.push_back(message);
        if log.len() > self.max_size {
            log.pop_front();
        }
    }

    pub fn read_all(&self) -> Vec<String> {
        self.entries.read().iter().cloned().collect()
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }
}

// ============================================================================
// CONFIG BUFFER - Runtime-updatable configuration
// ============================================================================

/// Thread-safe configuration holder. Updates are validated before they are
/// committed; an invalid update leaves the previous configuration in place.
#[derive(Clone)]
pub struct ConfigBuffer {
    data: Arc<Mutex<DashboardConfig>>,
}

impl ConfigBuffer {
    /// `config` is expected to be valid already (the dashboard validates at
    /// construction).
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            data: Arc::new(Mutex::new(config)),
        }
    }

    pub fn get(&self) -> DashboardConfig {
        self.data.lock().clone()
    }

    /// Apply `f` to a copy of the current configuration and commit it only
    /// if the result validates. Changes take effect on the next tick; a
    /// smaller window size truncates existing windows there.
    pub fn try_update<F>(&self, f: F) -> Result<(), ConfigError>
    where
        F: FnOnce(&mut DashboardConfig),
    {
        let mut current = self.data.lock();
        let mut candidate = current.clone();
        f(&mut candidate);
        candidate.validate()?;
        *current = candidate;
        Ok(())
    }
}
