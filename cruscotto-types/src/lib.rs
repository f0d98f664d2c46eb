//! Data transfer objects, configuration primitives, and the unified error
//! type shared by the cruscotto crates.
#![warn(missing_docs)]

mod config;
mod error;
mod indicators;
mod point;

pub use config::{
    BlockOrdering, ClassifierConfig, CruscottoConfig, MergeConfig, MissingHistoryPolicy,
};
pub use error::CruscottoError;
pub use indicators::{IndicatorSet, LongTermTrend, RsiZone, Signal, Verdict, Vote, Votes};
pub use point::{MergedPoint, MergedSeries, ObservedPoint, PredictedPoint};
