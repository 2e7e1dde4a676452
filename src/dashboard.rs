//! Dashboard module - owned lifecycle around the sampling and clock tasks
//!
//! [`TelemetryDashboard`] replaces the ambient globals and timers of earlier
//! dashboard iterations with one owned object: construct it from a validated
//! configuration, `start()` it, read snapshots, `stop()` it.

use std::sync::Arc;
use std::time::Duration;

use crossbeam::channel::Receiver;
use log::info;
use parking_lot::Mutex;
use tokio::task::JoinHandle;

use crate::config::{ConfigError, DashboardConfig, SamplerMode};
use crate::evaluator::{Evaluator, Snapshot};
use crate::ipc::{ConfigBuffer, DashboardChannels, EventLog, SnapshotCell};
use crate::metrics::{MetricsReport, TimingMetrics};
use crate::predictor::{PredictorClient, PredictorError};
use crate::tasks;
use crate::telemetry::sampler::{LocalSampler, Sampler};

const SNAPSHOT_CHANNEL_SIZE: usize = 64;

#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Predictor(#[from] PredictorError),
}

/// Shared context handed to the periodic tasks. Cheap to clone: everything
/// inside is an `Arc` or an atomic handle.
#[derive(Clone)]
pub struct DashboardCore {
    pub sampler: Arc<Sampler>,
    pub evaluator: Arc<Mutex<Evaluator>>,
    pub config: ConfigBuffer,
    pub snapshots: SnapshotCell,
    pub channels: DashboardChannels,
    pub events: EventLog,
    pub metrics: TimingMetrics,
}

pub struct TelemetryDashboard {
    core: DashboardCore,
    sampler_handle: Option<JoinHandle<()>>,
    clock_handle: Option<JoinHandle<()>>,
}

impl TelemetryDashboard {
    /// Build a dashboard from `config`. The sampling strategy and endpoint
    /// are fixed here; threshold, window size, and intervals stay adjustable
    /// at runtime through [`TelemetryDashboard::update_config`].
    pub fn new(config: DashboardConfig) -> Result<Self, DashboardError> {
        config.validate()?;

        let sampler = match config.mode {
            SamplerMode::Local => Sampler::Local(LocalSampler::new(config.noise_seed)),
            SamplerMode::Remote => Sampler::Remote(
                LocalSampler::new(config.noise_seed),
                PredictorClient::new(
                    &config.endpoint,
                    Duration::from_millis(config.request_timeout_ms),
                )?,
            ),
        };
        let evaluator = Evaluator::new(config.threshold_celsius, config.window_size);
        let events = EventLog::new(config.event_log_size);

        let core = DashboardCore {
            sampler: Arc::new(sampler),
            evaluator: Arc::new(Mutex::new(evaluator)),
            config: ConfigBuffer::new(config),
            snapshots: SnapshotCell::new(Snapshot::initial()),
            channels: DashboardChannels::new(SNAPSHOT_CHANNEL_SIZE),
            events,
            metrics: TimingMetrics::new(),
        };

        Ok(Self {
            core,
            sampler_handle: None,
            clock_handle: None,
        })
    }

    /// Spawn the sampling and clock tasks. No-op when already running.
    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }
        let cfg = self.core.config.get();
        info!(
            "starting telemetry dashboard for {} ({} mode, {} ms interval)",
            cfg.satellite_id, cfg.mode, cfg.poll_interval_ms
        );
        self.sampler_handle = Some(tasks::sampler_task::spawn_sampler_task(self.core.clone()));
        self.clock_handle = Some(tasks::clock_task::spawn_clock_task(
            self.core.snapshots.clone(),
            cfg.clock_interval_ms,
        ));
    }

    /// Cancel both timers, abandoning any in-flight remote request. A tick
    /// already past its network call may still publish one last snapshot;
    /// the cell is last-writer-wins so that is harmless.
    pub fn stop(&mut self) {
        if let Some(handle) = self.sampler_handle.take() {
            handle.abort();
        }
        if let Some(handle) = self.clock_handle.take() {
            handle.abort();
        }
    }

    pub fn is_running(&self) -> bool {
        self.sampler_handle.is_some()
    }

    /// Latest derived snapshot. A value copy; safe to hold across ticks.
    pub fn snapshot(&self) -> Snapshot {
        self.core.snapshots.load()
    }

    /// Receiver for push-style consumption of every published snapshot.
    pub fn subscribe(&self) -> Arc<Receiver<Snapshot>> {
        self.core.channels.snapshot_rx.clone()
    }

    pub fn events(&self) -> Vec<String> {
        self.core.events.read_all()
    }

    pub fn metrics_report(&self) -> MetricsReport {
        self.core.metrics.report()
    }

    pub fn config(&self) -> DashboardConfig {
        self.core.config.get()
    }

    /// Validated runtime reconfiguration; changes apply on the next tick.
    pub fn update_config<F>(&self, f: F) -> Result<(), ConfigError>
    where
        F: FnOnce(&mut DashboardConfig),
    {
        self.core.config.try_update(f)
    }
}

impl Drop for TelemetryDashboard {
    fn drop(&mut self) {
        self.stop();
    }
}
