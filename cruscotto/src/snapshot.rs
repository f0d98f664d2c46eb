use cruscotto_core::{LongTermTrend, MergedSeries, RsiZone, Verdict, Votes};
use serde::Serialize;

/// What the prediction chart should show.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "series", rename_all = "snake_case")]
pub enum ChartState {
    /// A merged series ready to plot.
    Ready(MergedSeries),
    /// No usable history; render an explicit "no data" message.
    MissingData,
}

impl ChartState {
    /// The series, if there is one.
    #[must_use]
    pub const fn series(&self) -> Option<&MergedSeries> {
        match self {
            Self::Ready(s) => Some(s),
            Self::MissingData => None,
        }
    }

    /// True for the "no data" state.
    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::MissingData)
    }
}

/// Everything the dashboard derives for one ticker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TickerSnapshot {
    /// Ticker symbol, as reported by the history payload.
    pub ticker: String,
    /// Prediction chart contents.
    pub chart: ChartState,
    /// Bullish/bearish/neutral summary.
    pub verdict: Verdict,
    /// Per-pair votes behind the verdict.
    pub votes: Votes,
    /// Price vs. MA200; not part of the verdict.
    pub long_term_trend: Option<LongTermTrend>,
    /// RSI reading label.
    pub rsi_zone: Option<RsiZone>,
    /// Model confidence in percent, passed through from the forecast.
    pub confidence: Option<f64>,
}
