//! Indicator-derived signals.
//!
//! - `classify`: three equal-weight votes reduced to a verdict
//! - `trend`: MA200 position and RSI zone labels, kept out of the tally
/// Vote tally and verdict.
pub mod classify;
/// Informational facts that do not vote.
pub mod trend;
