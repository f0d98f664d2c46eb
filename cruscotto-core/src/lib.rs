//! cruscotto-core
//!
//! Pure, synchronous transforms over already-fetched dashboard data.
//!
//! - `timeseries`: validate and merge a historical close series with a
//!   forecast series into one chart-ready timeline.
//! - `signals`: reduce RSI, MACD/signal and MA20/MA50 readings to a
//!   bullish/bearish/neutral verdict, plus the informational MA200 and RSI
//!   zone facts.
//!
//! Nothing here performs I/O or keeps state between calls; every function
//! may be called concurrently from any thread.
#![warn(missing_docs)]

/// Indicator vote classification.
pub mod signals;
/// Time-series validation and merging.
pub mod timeseries;
pub mod types;

pub use signals::classify::{classify, classify_with, votes, votes_with};
pub use signals::trend::{long_term_trend, rsi_zone, rsi_zone_with};
pub use timeseries::merge::{merge_series, merge_series_with};
pub use timeseries::util::{parse_calendar_date, validate_point};
pub use types::*;
