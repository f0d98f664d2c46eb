//! Point types for the historical, predicted, and merged series.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One historical closing price as delivered by the data source.
///
/// The timestamp is kept as the raw string the source produced; it is only
/// interpreted when the point is merged. Decodes from `{ "date", "close" }`
/// and ignores any other fields (open, high, volume, ...). A row with a null
/// or missing field still decodes and is dropped at merge time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservedPoint {
    /// Calendar date as emitted upstream, e.g. `2024-03-01`. `None` when the
    /// source sent `null` or omitted it.
    #[serde(rename = "date", default)]
    pub timestamp: Option<String>,
    /// Closing price. `None` when the source sent `null` or omitted it.
    #[serde(rename = "close", default)]
    pub value: Option<f64>,
}

impl ObservedPoint {
    /// Build an observation from a date string and a closing price.
    pub fn new(timestamp: impl Into<String>, value: f64) -> Self {
        Self {
            timestamp: Some(timestamp.into()),
            value: Some(value),
        }
    }
}

/// One forecast price for a future date. Decodes from `{ "date", "price" }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictedPoint {
    /// Calendar date as emitted upstream. `None` when the source sent `null`
    /// or omitted it.
    #[serde(rename = "date", default)]
    pub timestamp: Option<String>,
    /// Forecast price. `None` when the source sent `null` or omitted it.
    #[serde(rename = "price", default)]
    pub value: Option<f64>,
}

impl PredictedPoint {
    /// Build a prediction from a date string and a forecast price.
    pub fn new(timestamp: impl Into<String>, value: f64) -> Self {
        Self {
            timestamp: Some(timestamp.into()),
            value: Some(value),
        }
    }
}

/// A chart-ready point carrying either an actual or a predicted value.
///
/// Built only through [`MergedSeries::from_blocks`], so exactly one of
/// `actual`/`predicted` is present.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MergedPoint {
    #[serde(rename = "date")]
    timestamp: NaiveDate,
    actual: Option<f64>,
    predicted: Option<f64>,
    sequence_index: usize,
}

impl MergedPoint {
    /// Calendar date of the point.
    #[must_use]
    pub const fn timestamp(&self) -> NaiveDate {
        self.timestamp
    }

    /// Historical close, if this point came from the observed series.
    #[must_use]
    pub const fn actual(&self) -> Option<f64> {
        self.actual
    }

    /// Forecast price, if this point came from the predicted series.
    #[must_use]
    pub const fn predicted(&self) -> Option<f64> {
        self.predicted
    }

    /// Position in the merged series.
    #[must_use]
    pub const fn sequence_index(&self) -> usize {
        self.sequence_index
    }

    /// True if the point came from the observed series.
    #[must_use]
    pub const fn is_observed(&self) -> bool {
        self.actual.is_some()
    }
}

/// Observed block followed by predicted block, with the "today" marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MergedSeries {
    points: Vec<MergedPoint>,
    boundary: Option<usize>,
}

impl MergedSeries {
    /// Assemble a series from dated values.
    ///
    /// Non-finite values are dropped first. Indices are then assigned 0..n-1
    /// in block order: every observed point first, then every predicted
    /// point. The boundary is the last observed point, or `None` when the
    /// observed block is empty.
    #[must_use]
    pub fn from_blocks(observed: Vec<(NaiveDate, f64)>, predicted: Vec<(NaiveDate, f64)>) -> Self {
        let observed: Vec<_> = observed.into_iter().filter(|(_, v)| v.is_finite()).collect();
        let predicted = predicted.into_iter().filter(|(_, v)| v.is_finite());
        let boundary = observed.len().checked_sub(1);
        let mut points = Vec::with_capacity(observed.len() + predicted.size_hint().0);
        for (timestamp, v) in observed {
            points.push(MergedPoint {
                timestamp,
                actual: Some(v),
                predicted: None,
                sequence_index: points.len(),
            });
        }
        for (timestamp, v) in predicted {
            points.push(MergedPoint {
                timestamp,
                actual: None,
                predicted: Some(v),
                sequence_index: points.len(),
            });
        }
        Self { points, boundary }
    }

    /// All points in sequence order.
    #[must_use]
    pub fn points(&self) -> &[MergedPoint] {
        &self.points
    }

    /// Consume the series and return its points.
    #[must_use]
    pub fn into_points(self) -> Vec<MergedPoint> {
        self.points
    }

    /// Sequence index of the boundary point, if any.
    #[must_use]
    pub const fn boundary(&self) -> Option<usize> {
        self.boundary
    }

    /// The last historical point ("today").
    #[must_use]
    pub fn boundary_point(&self) -> Option<&MergedPoint> {
        self.boundary.and_then(|i| self.points.get(i))
    }

    /// The observed block.
    #[must_use]
    pub fn observed(&self) -> &[MergedPoint] {
        let end = self.boundary.map_or(0, |i| i + 1);
        &self.points[..end]
    }

    /// The predicted block.
    #[must_use]
    pub fn predicted(&self) -> &[MergedPoint] {
        let start = self.boundary.map_or(0, |i| i + 1);
        &self.points[start..]
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if the series holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
