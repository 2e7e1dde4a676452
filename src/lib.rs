//! Satellite telemetry core - periodic sampling, bounded history windows,
//! and anomaly evaluation.
//!
//! The crate produces [`Snapshot`] values for any rendering layer to
//! consume: a sampler (local simulation or remote predictor) feeds an
//! evaluator that owns per-metric FIFO history windows and derives the
//! anomaly state and summary statistics. [`TelemetryDashboard`] wires both
//! behind an owned start/stop lifecycle driven by tokio interval timers.

pub mod config;
pub mod dashboard;
pub mod evaluator;
pub mod history;
pub mod ipc;
pub mod metrics;
pub mod predictor;
pub mod tasks;
pub mod telemetry;

pub use config::{load_config, ConfigError, DashboardConfig, SamplerMode};
pub use dashboard::{DashboardCore, DashboardError, TelemetryDashboard};
pub use evaluator::{AnomalyState, Evaluator, RemoteVerdict, Snapshot, WindowStats};
pub use history::{HistoryWindow, DEFAULT_WINDOW_SIZE};
pub use ipc::{ConfigBuffer, DashboardChannels, EventLog, SnapshotCell};
pub use metrics::{MetricsReport, TimingMetrics};
pub use predictor::{PredictRequest, PredictResponse, PredictorClient, PredictorError};
pub use telemetry::noise::{FixedNoise, NoiseSource, StdNoise};
pub use telemetry::sampler::{LocalSampler, SampleOutcome, Sampler};
pub use telemetry::{LinkStatus, TelemetryReading};
