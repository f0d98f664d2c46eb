//! Time-series utilities for the chart.
//!
//! Modules include:
//! - `merge`: join the observed and predicted blocks and mark the boundary
//! - `util`: date parsing and per-point well-formedness
/// Observed/predicted merge.
pub mod merge;
/// Point validation helpers.
pub mod util;
