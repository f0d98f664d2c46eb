use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the cruscotto workspace.
///
/// Structural failures (no usable history, invalid configuration, undecodable
/// payloads) surface here. Individual malformed points never do: they are
/// skipped where they are read.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CruscottoError {
    /// The historical series was empty or contained no well-formed points.
    #[error("missing historical data")]
    MissingHistoricalData,

    /// Invalid input argument or configuration value.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// A payload could not be decoded into the expected shape.
    #[error("decode error: {0}")]
    Decode(String),

    /// A resource or ticker could not be found.
    #[error("not found: {what}")]
    NotFound {
        /// Description of missing resource, e.g. "history for AAPL".
        what: String,
    },

    /// Unknown/opaque error.
    #[error("unknown error: {0}")]
    Other(String),
}

impl CruscottoError {
    /// Helper: build an `InvalidArg` error from a message.
    pub fn invalid_arg(msg: impl Into<String>) -> Self {
        Self::InvalidArg(msg.into())
    }

    /// Helper: build a `Decode` error from a message.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Returns true if this error means there is nothing to chart.
    ///
    /// Callers render a distinct "no data" state for these instead of failing.
    #[must_use]
    pub const fn is_missing_data(&self) -> bool {
        matches!(self, Self::MissingHistoricalData | Self::NotFound { .. })
    }
}
