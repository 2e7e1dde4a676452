//! Remote predictor client for the `/predict` endpoint.
//!
//! Sends locally simulated drafts to an external ML service and receives a
//! corrected reading plus an anomaly verdict. One attempt per tick; the
//! caller handles failures by keeping the previous snapshot.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::telemetry::TelemetryReading;

/// Errors from the predictor HTTP layer. Always recovered by the caller,
/// never fatal to the sampling loop.
#[derive(Debug, thiserror::Error)]
pub enum PredictorError {
    /// The HTTP request itself failed (connect, DNS, timeout).
    #[error("predict request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The predictor answered with a non-success status code.
    #[error("predictor returned {status}: {body}")]
    Api { status: u16, body: String },
}

/// Request body for `POST /predict`.
///
/// The third metric channel travels as `altitude` on the wire even though
/// dashboards display it as pressure; the field name follows the wire.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictRequest {
    pub satellite_id: String,
    pub temperature: f64,
    pub voltage: f64,
    pub altitude: f64,
}

impl PredictRequest {
    pub fn from_reading(satellite_id: &str, reading: &TelemetryReading) -> Self {
        Self {
            satellite_id: satellite_id.to_string(),
            temperature: reading.temperature,
            voltage: reading.voltage,
            altitude: reading.pressure,
        }
    }
}

/// Response body from `POST /predict`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictResponse {
    pub temperature: f64,
    pub voltage: f64,
    pub altitude: f64,
    pub is_anomaly: bool,
    pub anomaly_score: f64,
}

/// HTTP client for a single prediction endpoint.
#[derive(Clone)]
pub struct PredictorClient {
    client: reqwest::Client,
    base_url: String,
}

impl PredictorClient {
    /// Create a client for the given base URL. The timeout bounds every
    /// request so a hung endpoint cannot outlive the tick cadence.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, PredictorError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Submit one draft reading for correction and scoring.
    pub async fn predict(&self, request: &PredictRequest) -> Result<PredictResponse, PredictorError> {
        let response = self
            .client
            .post(format!("{}/predict", self.base_url))
            .json(request)
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;
        Ok(response.json::<PredictResponse>().await?)
    }

    /// Probe the predictor's `GET /health` endpoint.
    pub async fn health(&self) -> Result<(), PredictorError> {
        let response = self
            .client
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;

        Self::ensure_success(response).await?;
        Ok(())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, PredictorError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PredictorError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}
