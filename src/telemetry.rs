//! Telemetry module - reading shape, noise injection, and sampling strategies

pub mod noise;
pub mod sampler;

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// TELEMETRY READING
// ============================================================================

/// One timestamped sample of the three metric channels.
///
/// `pressure` is the generic third channel: remote predictors carry it on the
/// wire as `altitude`, while dashboards have historically labelled the same
/// value "pressure". The two names are aliases for one channel and the
/// ambiguity is kept on purpose.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TelemetryReading {
    pub timestamp: DateTime<Utc>,
    pub temperature: f64,
    pub voltage: f64,
    pub pressure: f64,
    pub sequence_id: u64,
}

// ============================================================================
// LINK STATUS
// ============================================================================

/// Flat three-state connectivity status of the sampling source.
///
/// Any tick may move freely between `Connected` and `Disconnected` based
/// solely on that tick's network outcome; there are no transition guards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LinkStatus {
    /// Pure local simulation, no remote endpoint involved.
    Simulating,
    /// Last remote prediction round-trip succeeded.
    Connected,
    /// Last remote prediction round-trip failed.
    Disconnected,
}

impl std::fmt::Display for LinkStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LinkStatus::Simulating => write!(f, "Simulating"),
            LinkStatus::Connected => write!(f, "Connected"),
            LinkStatus::Disconnected => write!(f, "Disconnected"),
        }
    }
}
