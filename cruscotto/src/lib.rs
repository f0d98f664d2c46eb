//! Cruscotto turns the per-ticker payloads of a stock dashboard API into
//! what the dashboard draws.
//!
//! Overview
//! - Merges the historical close series with the model forecast into one
//!   chart-ready timeline with a "today" boundary.
//! - Reduces RSI, MACD/signal and MA20/MA50 into a bullish/bearish/neutral
//!   verdict with its vote tally.
//! - Reports price vs. MA200 and an RSI zone label next to the verdict,
//!   without letting them vote.
//!
//! Key behaviors and trade-offs
//! - Malformed rows (bad date, null or non-finite value) are dropped
//!   silently; a chart gets thinner, it never fails.
//! - No usable history at all is a structural failure. `Cruscotto::snapshot`
//!   turns it into `ChartState::MissingData` so the caller can render an
//!   explicit "no data" message.
//! - History and forecast are concatenated by source, never sorted against
//!   each other.
//! - Each vote has equal weight; a marginal MACD cross counts as much as a
//!   deep oversold RSI.
//!
//! Examples
//! ```rust
//! use cruscotto::{ChartState, Cruscotto, Signal};
//!
//! let history = r#"{ "ticker": "AAPL", "history": [
//!     { "date": "2024-03-01", "close": 150.23 },
//!     { "date": "2024-03-02", "close": 152.45 } ] }"#;
//! let prediction = r#"{ "ticker": "AAPL", "predictions": [
//!     { "date": "2024-03-15", "price": 158.34 } ] }"#;
//! let indicators = r#"{ "ticker": "AAPL", "indicators": {
//!     "rsi": 25.0, "macd": 1.0, "signal": 0.5, "ma20": 100.0, "ma50": 90.0 } }"#;
//!
//! let dash = Cruscotto::builder().history_window(30).build()?;
//! let snap = dash.snapshot_from_json(history, prediction, indicators)?;
//!
//! let ChartState::Ready(series) = &snap.chart else { panic!("expected a chart") };
//! assert_eq!(series.len(), 3);
//! assert_eq!(series.boundary(), Some(1));
//! assert_eq!(snap.verdict.signal, Signal::Bullish);
//! assert_eq!(snap.verdict.tally(), (3, 0));
//! # Ok::<(), cruscotto::CruscottoError>(())
//! ```
#![warn(missing_docs)]

mod core;
/// API response shapes and JSON decoding.
pub mod payload;
mod snapshot;

pub use crate::core::{Cruscotto, CruscottoBuilder};
pub use payload::{HistoryPayload, IndicatorsPayload, PredictionPayload, decode};
pub use snapshot::{ChartState, TickerSnapshot};

pub use cruscotto_core::{
    BlockOrdering, ClassifierConfig, CruscottoConfig, CruscottoError, IndicatorSet,
    LongTermTrend, MergeConfig, MergedPoint, MergedSeries, MissingHistoryPolicy, ObservedPoint,
    PredictedPoint, RsiZone, Signal, Verdict, Vote, Votes,
};
