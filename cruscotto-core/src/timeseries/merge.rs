use chrono::NaiveDate;

use crate::timeseries::util::validate_point;
use crate::{
    BlockOrdering, CruscottoError, MergeConfig, MergedSeries, MissingHistoryPolicy, ObservedPoint,
    PredictedPoint,
};

/// Merge a historical close series with a forecast series using the default
/// [`MergeConfig`].
///
/// - Malformed points (missing or unparseable date, missing or non-finite value) are
///   skipped; the rest keep their relative order.
/// - Observed points come first, then predicted points. The two blocks are
///   never sorted against each other, so a forecast dated before the last
///   close still lands after it.
/// - Indices run 0..n-1 across both blocks; the last observed point is the
///   boundary.
///
/// ```
/// use cruscotto_core::{merge_series, ObservedPoint, PredictedPoint};
///
/// let observed = [
///     ObservedPoint::new("2024-03-01", 150.23),
///     ObservedPoint::new("2024-03-02", 152.45),
/// ];
/// let predicted = [PredictedPoint::new("2024-03-15", 158.34)];
///
/// let series = merge_series(&observed, &predicted).unwrap();
/// assert_eq!(series.len(), 3);
/// assert_eq!(series.boundary(), Some(1));
/// assert_eq!(series.points()[2].predicted(), Some(158.34));
/// assert_eq!(series.points()[2].actual(), None);
/// ```
///
/// # Errors
/// Returns `Err(CruscottoError::MissingHistoricalData)` if `observed` is empty
/// or has no well-formed point.
pub fn merge_series(
    observed: &[ObservedPoint],
    predicted: &[PredictedPoint],
) -> Result<MergedSeries, CruscottoError> {
    merge_series_with(observed, predicted, &MergeConfig::default())
}

/// Merge with explicit settings.
///
/// `cfg.ordering` may stable-sort each block by date before indexing;
/// `cfg.history_window` then keeps only the trailing observations. With
/// `MissingHistoryPolicy::PredictionOnly` an empty observed block yields a
/// prediction-only series without a boundary instead of an error.
///
/// # Errors
/// Returns `Err(CruscottoError::MissingHistoricalData)` if no well-formed
/// observation remains and the policy is `MissingHistoryPolicy::Error`.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "cruscotto_core::merge_series",
        skip_all,
        fields(observed = observed.len(), predicted = predicted.len()),
    )
)]
pub fn merge_series_with(
    observed: &[ObservedPoint],
    predicted: &[PredictedPoint],
    cfg: &MergeConfig,
) -> Result<MergedSeries, CruscottoError> {
    let mut history = well_formed(
        observed.iter().map(|p| (p.timestamp.as_deref(), p.value)),
        "observed",
    );
    let mut forecast = well_formed(
        predicted.iter().map(|p| (p.timestamp.as_deref(), p.value)),
        "predicted",
    );

    if cfg.ordering == BlockOrdering::SortWithinBlocks {
        history.sort_by_key(|(d, _)| *d);
        forecast.sort_by_key(|(d, _)| *d);
    }

    if let Some(n) = cfg.effective_window() {
        let excess = history.len().saturating_sub(n);
        history.drain(..excess);
    }

    if history.is_empty() && cfg.missing_history != MissingHistoryPolicy::PredictionOnly {
        return Err(CruscottoError::MissingHistoricalData);
    }

    Ok(MergedSeries::from_blocks(history, forecast))
}

#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn well_formed<'a, I>(points: I, block: &'static str) -> Vec<(NaiveDate, f64)>
where
    I: ExactSizeIterator<Item = (Option<&'a str>, Option<f64>)>,
{
    let mut out = Vec::with_capacity(points.len());
    for (position, (ts, value)) in points.enumerate() {
        match validate_point(ts, value) {
            Some(p) => out.push(p),
            None => {
                #[cfg(feature = "tracing")]
                tracing::debug!(block, position, timestamp = ?ts, ?value, "skipping malformed point");
            }
        }
    }
    out
}
