//! Shapes of the dashboard API responses consumed by the snapshot assembly.

use cruscotto_core::{CruscottoError, IndicatorSet, ObservedPoint, PredictedPoint};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Body of `GET /stock/{ticker}/history`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPayload {
    /// Ticker symbol.
    pub ticker: String,
    /// Requested period, e.g. `6mo`.
    #[serde(default)]
    pub period: Option<String>,
    /// Daily rows; only `date` and `close` are read.
    #[serde(default)]
    pub history: Vec<ObservedPoint>,
}

/// Body of `GET /stock/{ticker}/predict/{method}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionPayload {
    /// Ticker symbol.
    pub ticker: String,
    /// Model label reported by the API, e.g. `linear_regression`.
    #[serde(default)]
    pub method: Option<String>,
    /// Forecast rows.
    #[serde(default)]
    pub predictions: Vec<PredictedPoint>,
    /// Model confidence in percent, when the model reports one.
    #[serde(default)]
    pub confidence: Option<f64>,
}

/// Body of `GET /stock/{ticker}/indicators`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorsPayload {
    /// Ticker symbol.
    pub ticker: String,
    /// Date of the latest reading.
    #[serde(default)]
    pub date: Option<String>,
    /// Latest readings; missing keys and nulls are absent.
    #[serde(default)]
    pub indicators: IndicatorSet,
}

/// Decode a JSON body.
///
/// # Errors
/// Returns `CruscottoError::Decode` if the body is not valid JSON of shape `T`.
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T, CruscottoError> {
    serde_json::from_str(body).map_err(|e| CruscottoError::decode(e.to_string()))
}
