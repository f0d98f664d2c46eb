use cruscotto_core::{
    BlockOrdering, ClassifierConfig, CruscottoConfig, CruscottoError, IndicatorSet,
    LongTermTrend, MergedSeries, MissingHistoryPolicy, ObservedPoint, PredictedPoint, RsiZone,
    Verdict, Votes,
};

use crate::payload::{HistoryPayload, IndicatorsPayload, PredictionPayload, decode};
use crate::snapshot::{ChartState, TickerSnapshot};

/// Applies the merge and classifier settings to fetched dashboard data.
///
/// Holds only immutable configuration, so one instance can serve any number
/// of tickers from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct Cruscotto {
    cfg: CruscottoConfig,
}

/// Builder for constructing a `Cruscotto` with custom configuration.
#[derive(Debug, Clone, Default)]
pub struct CruscottoBuilder {
    cfg: CruscottoConfig,
}

impl CruscottoBuilder {
    /// Create a new builder with the defaults: full history, structural
    /// ordering, missing history is an error, RSI band 30/70.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cfg: CruscottoConfig::default(),
        }
    }

    /// Replace the whole configuration.
    #[must_use]
    pub const fn config(mut self, cfg: CruscottoConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Chart only the trailing `n` well-formed closes. `0` keeps all.
    ///
    /// The dashboard plots the last 30 closes next to the forecast so the
    /// forecast stays readable on long periods.
    #[must_use]
    pub const fn history_window(mut self, n: usize) -> Self {
        self.cfg.merge.history_window = Some(n);
        self
    }

    /// Select the per-block ordering policy.
    ///
    /// Behavior and trade-offs:
    /// - `Structural` trusts the source order and is the default.
    /// - `SortWithinBlocks` tolerates unsorted sources but still never moves a
    ///   forecast before the boundary; a forecast dated in the past stays on
    ///   the forecast side.
    #[must_use]
    pub const fn block_ordering(mut self, ordering: BlockOrdering) -> Self {
        self.cfg.merge.ordering = ordering;
        self
    }

    /// Select what happens when no usable history remains.
    #[must_use]
    pub const fn missing_history(mut self, policy: MissingHistoryPolicy) -> Self {
        self.cfg.merge.missing_history = policy;
        self
    }

    /// Set the RSI oversold/overbought thresholds.
    #[must_use]
    pub const fn rsi_thresholds(mut self, oversold: f64, overbought: f64) -> Self {
        self.cfg.classifier = ClassifierConfig {
            rsi_oversold: oversold,
            rsi_overbought: overbought,
        };
        self
    }

    /// Build the `Cruscotto` instance.
    ///
    /// # Errors
    /// Returns `CruscottoError::InvalidArg` if the RSI thresholds do not form
    /// a band inside `[0, 100]`.
    pub fn build(self) -> Result<Cruscotto, CruscottoError> {
        self.cfg.validate()?;
        Ok(Cruscotto { cfg: self.cfg })
    }
}

impl Cruscotto {
    /// Start building a new `Cruscotto` instance.
    #[must_use]
    pub fn builder() -> CruscottoBuilder {
        CruscottoBuilder::new()
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &CruscottoConfig {
        &self.cfg
    }

    /// Merge history and forecast with the configured settings.
    ///
    /// # Errors
    /// Returns `CruscottoError::MissingHistoricalData` when no usable history
    /// remains and the policy is `MissingHistoryPolicy::Error`.
    pub fn merge(
        &self,
        observed: &[ObservedPoint],
        predicted: &[PredictedPoint],
    ) -> Result<MergedSeries, CruscottoError> {
        cruscotto_core::merge_series_with(observed, predicted, &self.cfg.merge)
    }

    /// Classify indicator readings with the configured thresholds.
    #[must_use]
    pub fn classify(&self, indicators: &IndicatorSet) -> Verdict {
        cruscotto_core::classify_with(indicators, &self.cfg.classifier)
    }

    /// Per-pair votes with the configured thresholds.
    #[must_use]
    pub fn votes(&self, indicators: &IndicatorSet) -> Votes {
        cruscotto_core::votes_with(indicators, &self.cfg.classifier)
    }

    /// Price vs. MA200.
    #[must_use]
    pub fn long_term_trend(&self, indicators: &IndicatorSet) -> Option<LongTermTrend> {
        cruscotto_core::long_term_trend(indicators)
    }

    /// RSI label with the configured thresholds.
    #[must_use]
    pub fn rsi_zone(&self, indicators: &IndicatorSet) -> Option<RsiZone> {
        cruscotto_core::rsi_zone_with(indicators, &self.cfg.classifier)
    }

    /// Assemble everything the dashboard shows for one ticker.
    ///
    /// Missing history becomes `ChartState::MissingData` rather than an
    /// error, so the indicator panel still renders.
    ///
    /// # Errors
    /// Returns `CruscottoError::InvalidArg` if the payloads name different
    /// tickers.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "cruscotto::snapshot",
            skip_all,
            fields(ticker = %history.ticker),
        )
    )]
    pub fn snapshot(
        &self,
        history: &HistoryPayload,
        prediction: &PredictionPayload,
        indicators: &IndicatorsPayload,
    ) -> Result<TickerSnapshot, CruscottoError> {
        for other in [&prediction.ticker, &indicators.ticker] {
            if !other.eq_ignore_ascii_case(&history.ticker) {
                return Err(CruscottoError::invalid_arg(format!(
                    "payload ticker mismatch: {} vs {other}",
                    history.ticker
                )));
            }
        }

        let chart = match self.merge(&history.history, &prediction.predictions) {
            Ok(series) => ChartState::Ready(series),
            Err(CruscottoError::MissingHistoricalData) => {
                #[cfg(feature = "tracing")]
                tracing::info!(ticker = %history.ticker, "no usable history; chart shows missing data");
                ChartState::MissingData
            }
            Err(e) => return Err(e),
        };

        let set = &indicators.indicators;
        let votes = self.votes(set);
        Ok(TickerSnapshot {
            ticker: history.ticker.clone(),
            chart,
            verdict: Verdict::from(votes),
            votes,
            long_term_trend: self.long_term_trend(set),
            rsi_zone: self.rsi_zone(set),
            confidence: prediction.confidence.filter(|c| c.is_finite()),
        })
    }

    /// Decode the three JSON bodies and assemble the snapshot.
    ///
    /// # Errors
    /// Returns `CruscottoError::Decode` for malformed bodies, and anything
    /// [`Cruscotto::snapshot`] returns.
    pub fn snapshot_from_json(
        &self,
        history: &str,
        prediction: &str,
        indicators: &str,
    ) -> Result<TickerSnapshot, CruscottoError> {
        let history: HistoryPayload = decode(history)?;
        let prediction: PredictionPayload = decode(prediction)?;
        let indicators: IndicatorsPayload = decode(indicators)?;
        self.snapshot(&history, &prediction, &indicators)
    }
}
