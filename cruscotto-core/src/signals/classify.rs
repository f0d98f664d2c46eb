use std::cmp::Ordering;

use crate::{ClassifierConfig, IndicatorSet, Verdict, Vote, Votes};

/// Classify indicator readings with the default RSI band (30/70).
///
/// Three independent, equal-weight votes:
/// - RSI: bullish below 30, bearish above 70, otherwise none.
/// - Momentum: bullish if MACD > signal, bearish if MACD < signal.
/// - Trend: bullish if MA20 > MA50, bearish if MA20 < MA50.
///
/// Ties and absent readings cast no vote. The verdict is whichever side has
/// more votes, `Neutral` on a tie (including 0-0). This never fails.
///
/// ```
/// use cruscotto_core::{classify, IndicatorSet, Signal};
///
/// let set: IndicatorSet = [
///     ("rsi", 25.0), ("macd", 1.0), ("signal", 0.5), ("ma20", 100.0), ("ma50", 90.0),
/// ]
/// .into_iter()
/// .collect();
///
/// let v = classify(&set);
/// assert_eq!(v.signal, Signal::Bullish);
/// assert_eq!(v.tally(), (3, 0));
/// ```
#[must_use]
pub fn classify(indicators: &IndicatorSet) -> Verdict {
    classify_with(indicators, &ClassifierConfig::default())
}

/// Classify with explicit RSI thresholds.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(name = "cruscotto_core::classify", level = "debug", skip_all, ret)
)]
#[must_use]
pub fn classify_with(indicators: &IndicatorSet, cfg: &ClassifierConfig) -> Verdict {
    Verdict::from(votes_with(indicators, cfg))
}

/// The individual votes behind [`classify`].
#[must_use]
pub fn votes(indicators: &IndicatorSet) -> Votes {
    votes_with(indicators, &ClassifierConfig::default())
}

/// The individual votes behind [`classify_with`].
#[must_use]
pub fn votes_with(indicators: &IndicatorSet, cfg: &ClassifierConfig) -> Votes {
    Votes {
        rsi: indicators.rsi().and_then(|rsi| rsi_vote(rsi, cfg)),
        momentum: pair_vote(indicators.macd(), indicators.signal()),
        trend: pair_vote(indicators.ma20(), indicators.ma50()),
    }
}

fn rsi_vote(rsi: f64, cfg: &ClassifierConfig) -> Option<Vote> {
    if rsi < cfg.rsi_oversold {
        Some(Vote::Bullish)
    } else if rsi > cfg.rsi_overbought {
        Some(Vote::Bearish)
    } else {
        None
    }
}

// fast above slow is bullish
fn pair_vote(fast: Option<f64>, slow: Option<f64>) -> Option<Vote> {
    match fast?.partial_cmp(&slow?)? {
        Ordering::Greater => Some(Vote::Bullish),
        Ordering::Less => Some(Vote::Bearish),
        Ordering::Equal => None,
    }
}
