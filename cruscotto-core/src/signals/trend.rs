use crate::{ClassifierConfig, IndicatorSet, LongTermTrend, RsiZone};

/// Position of the latest close relative to MA200.
///
/// `Above` when price is strictly greater, `Below` otherwise. `None` if either
/// reading is absent. Informational only; it never feeds the vote tally.
#[must_use]
pub fn long_term_trend(indicators: &IndicatorSet) -> Option<LongTermTrend> {
    let price = indicators.price()?;
    let ma200 = indicators.ma200()?;
    Some(if price > ma200 {
        LongTermTrend::Above
    } else {
        LongTermTrend::Below
    })
}

/// Label the RSI reading with the default 30/70 band.
#[must_use]
pub fn rsi_zone(indicators: &IndicatorSet) -> Option<RsiZone> {
    rsi_zone_with(indicators, &ClassifierConfig::default())
}

/// Label the RSI reading with explicit thresholds. Uses the same strict
/// comparisons as the RSI vote, so `Oversold` iff the vote is bullish.
#[must_use]
pub fn rsi_zone_with(indicators: &IndicatorSet, cfg: &ClassifierConfig) -> Option<RsiZone> {
    let rsi = indicators.rsi()?;
    Some(if rsi < cfg.rsi_oversold {
        RsiZone::Oversold
    } else if rsi > cfg.rsi_overbought {
        RsiZone::Overbought
    } else {
        RsiZone::Neutral
    })
}
