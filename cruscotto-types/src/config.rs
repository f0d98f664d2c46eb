//! Configuration types for merging and classification.

use serde::{Deserialize, Serialize};

use crate::CruscottoError;

/// Ordering applied to each source block before indices are assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum BlockOrdering {
    /// Keep each block in source order and concatenate observed then predicted.
    #[default]
    Structural,
    /// Stable-sort each block by date on its own, then concatenate.
    /// Points are never moved across the historical/forecast boundary.
    SortWithinBlocks,
}

/// What the merger does when no usable historical point remains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum MissingHistoryPolicy {
    /// Fail with `CruscottoError::MissingHistoricalData`.
    #[default]
    Error,
    /// Return the prediction block alone, with no boundary point.
    PredictionOnly,
}

/// Settings for merging an observed series with a predicted one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeConfig {
    /// Keep only the trailing N well-formed observations. `None` (or `Some(0)`) keeps all.
    pub history_window: Option<usize>,
    /// Per-block ordering policy.
    pub ordering: BlockOrdering,
    /// Behavior when the observed block is empty after filtering.
    pub missing_history: MissingHistoryPolicy,
}

impl MergeConfig {
    /// The effective trailing window, with `Some(0)` normalized to `None`.
    #[must_use]
    pub fn effective_window(&self) -> Option<usize> {
        self.history_window.filter(|&n| n > 0)
    }
}

/// Thresholds for the RSI vote.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// RSI strictly below this value votes bullish.
    pub rsi_oversold: f64,
    /// RSI strictly above this value votes bearish.
    pub rsi_overbought: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            rsi_oversold: 30.0,
            rsi_overbought: 70.0,
        }
    }
}

impl ClassifierConfig {
    /// Check that the thresholds describe a usable RSI band.
    ///
    /// # Errors
    /// Returns `CruscottoError::InvalidArg` unless
    /// `0 <= rsi_oversold < rsi_overbought <= 100`.
    pub fn validate(&self) -> Result<(), CruscottoError> {
        let lo = self.rsi_oversold;
        let hi = self.rsi_overbought;
        if !(lo.is_finite() && hi.is_finite()) {
            return Err(CruscottoError::invalid_arg("RSI thresholds must be finite"));
        }
        if lo < 0.0 || hi > 100.0 {
            return Err(CruscottoError::invalid_arg(format!(
                "RSI thresholds must lie in [0, 100]: oversold={lo} overbought={hi}"
            )));
        }
        if lo >= hi {
            return Err(CruscottoError::invalid_arg(format!(
                "oversold threshold must be below overbought: oversold={lo} overbought={hi}"
            )));
        }
        Ok(())
    }
}

/// Global configuration for the `Cruscotto` facade.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CruscottoConfig {
    /// Series merge settings.
    pub merge: MergeConfig,
    /// Signal classifier thresholds.
    pub classifier: ClassifierConfig,
}

impl CruscottoConfig {
    /// Validate every nested section.
    ///
    /// # Errors
    /// Propagates the first validation failure.
    pub fn validate(&self) -> Result<(), CruscottoError> {
        self.classifier.validate()
    }
}
