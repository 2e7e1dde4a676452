//! Configuration module - defaults, file loading, and validation
//!
//! Invalid values are rejected with a [`ConfigError`], never silently
//! clamped, so callers can surface a clear message.

use log::warn;
use serde::Deserialize;
use thiserror::Error;

use crate::history::DEFAULT_WINDOW_SIZE;

// ============================================================================
// SAMPLER MODE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SamplerMode {
    Local,
    Remote,
}

impl std::fmt::Display for SamplerMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SamplerMode::Local => write!(f, "local"),
            SamplerMode::Remote => write!(f, "remote"),
        }
    }
}

// ============================================================================
// DASHBOARD CONFIG
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub satellite_id: String,
    /// Sampling strategy; fixed once the dashboard is constructed.
    pub mode: SamplerMode,
    /// Base URL of the prediction endpoint (remote mode only).
    pub endpoint: String,
    pub threshold_celsius: f64,
    pub window_size: usize,
    pub poll_interval_ms: u64,
    pub clock_interval_ms: u64,
    pub request_timeout_ms: u64,
    pub noise_seed: u64,
    pub event_log_size: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            satellite_id: "SAT-001".to_string(),
            mode: SamplerMode::Local,
            endpoint: "http://127.0.0.1:8000".to_string(),
            threshold_celsius: 80.0,
            window_size: DEFAULT_WINDOW_SIZE,
            poll_interval_ms: 2000,
            clock_interval_ms: 1000,
            request_timeout_ms: 1500,
            noise_seed: 42,
            event_log_size: 256,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("window size must be at least 1 (got {0})")]
    InvalidWindowSize(usize),

    #[error("poll interval must be positive")]
    InvalidPollInterval,

    #[error("clock interval must be positive")]
    InvalidClockInterval,

    #[error("request timeout must be positive")]
    InvalidRequestTimeout,

    #[error("threshold must be a finite number (got {0})")]
    InvalidThreshold(f64),

    #[error("remote mode requires a non-empty endpoint")]
    MissingEndpoint,
}

impl DashboardConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_size < 1 {
            return Err(ConfigError::InvalidWindowSize(self.window_size));
        }
        if self.poll_interval_ms == 0 {
            return Err(ConfigError::InvalidPollInterval);
        }
        if self.clock_interval_ms == 0 {
            return Err(ConfigError::InvalidClockInterval);
        }
        if self.request_timeout_ms == 0 {
            return Err(ConfigError::InvalidRequestTimeout);
        }
        if !self.threshold_celsius.is_finite() {
            return Err(ConfigError::InvalidThreshold(self.threshold_celsius));
        }
        if self.mode == SamplerMode::Remote && self.endpoint.trim().is_empty() {
            return Err(ConfigError::MissingEndpoint);
        }
        Ok(())
    }
}

// ============================================================================
// CONFIG FILE LOADING
// ============================================================================

/// Load configuration from a TOML file, falling back to defaults when the
/// file is missing or unparsable. Validation happens separately, at
/// dashboard construction.
pub fn load_config(path: &str) -> DashboardConfig {
    match std::fs::read_to_string(path) {
        Ok(s) => toml::from_str::<DashboardConfig>(&s).unwrap_or_else(|err| {
            warn!("failed to parse {path}: {err}; using defaults");
            DashboardConfig::default()
        }),
        Err(_) => DashboardConfig::default(),
    }
}
