//! Re-export of the data model from `cruscotto-types`.
// Consolidated re-exports so downstream crates can depend on `cruscotto-core` only

pub use cruscotto_types::CruscottoError;
pub use cruscotto_types::{
    BlockOrdering, ClassifierConfig, CruscottoConfig, MergeConfig, MissingHistoryPolicy,
};
pub use cruscotto_types::{IndicatorSet, LongTermTrend, RsiZone, Signal, Verdict, Vote, Votes};
pub use cruscotto_types::{MergedPoint, MergedSeries, ObservedPoint, PredictedPoint};
