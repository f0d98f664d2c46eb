//! Indicator readings and the verdict types derived from them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Latest technical indicator readings for one ticker.
///
/// Any subset may be absent. Absent means unknown, never zero; a non-finite
/// reading is treated the same as an absent one by the accessors.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorSet {
    /// Relative strength index (14).
    pub rsi: Option<f64>,
    /// MACD line.
    pub macd: Option<f64>,
    /// MACD signal line.
    pub signal: Option<f64>,
    /// 20-day moving average.
    pub ma20: Option<f64>,
    /// 50-day moving average.
    pub ma50: Option<f64>,
    /// 200-day moving average.
    pub ma200: Option<f64>,
    /// Latest close.
    pub price: Option<f64>,
}

fn finite(v: Option<f64>) -> Option<f64> {
    v.filter(|x| x.is_finite())
}

impl IndicatorSet {
    /// Recognized indicator names.
    pub const KEYS: [&'static str; 7] = ["rsi", "macd", "signal", "ma20", "ma50", "ma200", "price"];

    /// Set a reading by name. Returns false (and changes nothing) for unknown names.
    pub fn set(&mut self, name: &str, value: f64) -> bool {
        let slot = match name {
            "rsi" => &mut self.rsi,
            "macd" => &mut self.macd,
            "signal" => &mut self.signal,
            "ma20" => &mut self.ma20,
            "ma50" => &mut self.ma50,
            "ma200" => &mut self.ma200,
            "price" => &mut self.price,
            _ => return false,
        };
        *slot = Some(value);
        true
    }

    /// Look up a usable reading by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        match name {
            "rsi" => self.rsi(),
            "macd" => self.macd(),
            "signal" => self.signal(),
            "ma20" => self.ma20(),
            "ma50" => self.ma50(),
            "ma200" => self.ma200(),
            "price" => self.price(),
            _ => None,
        }
    }

    /// Usable RSI reading.
    #[must_use]
    pub fn rsi(&self) -> Option<f64> {
        finite(self.rsi)
    }

    /// Usable MACD reading.
    #[must_use]
    pub fn macd(&self) -> Option<f64> {
        finite(self.macd)
    }

    /// Usable MACD signal reading.
    #[must_use]
    pub fn signal(&self) -> Option<f64> {
        finite(self.signal)
    }

    /// Usable MA20 reading.
    #[must_use]
    pub fn ma20(&self) -> Option<f64> {
        finite(self.ma20)
    }

    /// Usable MA50 reading.
    #[must_use]
    pub fn ma50(&self) -> Option<f64> {
        finite(self.ma50)
    }

    /// Usable MA200 reading.
    #[must_use]
    pub fn ma200(&self) -> Option<f64> {
        finite(self.ma200)
    }

    /// Usable latest close.
    #[must_use]
    pub fn price(&self) -> Option<f64> {
        finite(self.price)
    }
}

impl<K: AsRef<str>> FromIterator<(K, f64)> for IndicatorSet {
    /// Unknown names are ignored; later duplicates overwrite earlier ones.
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let mut set = Self::default();
        for (name, value) in iter {
            set.set(name.as_ref(), value);
        }
        set
    }
}

/// Ternary outcome of the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Signal {
    /// More bullish than bearish votes.
    Bullish,
    /// More bearish than bullish votes.
    Bearish,
    /// Tied tally, including no votes at all.
    #[default]
    Neutral,
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Bullish => "Bullish",
            Self::Bearish => "Bearish",
            Self::Neutral => "Neutral",
        })
    }
}

/// One indicator pair's contribution to the tally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Vote {
    /// Counts toward the bullish side.
    Bullish,
    /// Counts toward the bearish side.
    Bearish,
}

/// The individual votes behind a verdict. `None` means the pair abstained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Votes {
    /// RSI oversold/overbought vote.
    pub rsi: Option<Vote>,
    /// MACD vs. signal line vote.
    pub momentum: Option<Vote>,
    /// MA20 vs. MA50 crossover vote.
    pub trend: Option<Vote>,
}

impl Votes {
    /// Iterate over the cast votes.
    pub fn iter(&self) -> impl Iterator<Item = Vote> + '_ {
        [self.rsi, self.momentum, self.trend].into_iter().flatten()
    }

    /// Number of bullish votes.
    #[must_use]
    pub fn bullish(&self) -> u8 {
        self.count(Vote::Bullish)
    }

    /// Number of bearish votes.
    #[must_use]
    pub fn bearish(&self) -> u8 {
        self.count(Vote::Bearish)
    }

    fn count(&self, side: Vote) -> u8 {
        // at most three votes
        self.iter().fold(0, |n, v| if v == side { n + 1 } else { n })
    }
}

const MAX_VOTES: u8 = 3;

/// Classifier result: the signal and the tally that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Verdict {
    /// Aggregate signal.
    pub signal: Signal,
    /// Bullish votes, in `[0, 3]`.
    pub bullish: u8,
    /// Bearish votes, in `[0, 3]`.
    pub bearish: u8,
}

impl Verdict {
    /// Derive the verdict from a tally.
    ///
    /// There are only three voting pairs, so each count is capped at 3.
    #[must_use]
    pub fn from_tally(bullish: u8, bearish: u8) -> Self {
        let (bullish, bearish) = (bullish.min(MAX_VOTES), bearish.min(MAX_VOTES));
        let signal = match bullish.cmp(&bearish) {
            std::cmp::Ordering::Greater => Signal::Bullish,
            std::cmp::Ordering::Less => Signal::Bearish,
            std::cmp::Ordering::Equal => Signal::Neutral,
        };
        Self {
            signal,
            bullish,
            bearish,
        }
    }

    /// `(bullish, bearish)` counts.
    #[must_use]
    pub const fn tally(&self) -> (u8, u8) {
        (self.bullish, self.bearish)
    }
}

impl From<Votes> for Verdict {
    fn from(votes: Votes) -> Self {
        Self::from_tally(votes.bullish(), votes.bearish())
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.signal {
            Signal::Bullish => write!(
                f,
                "Bullish: {} bullish signals vs {} bearish signals",
                self.bullish, self.bearish
            ),
            Signal::Bearish => write!(
                f,
                "Bearish: {} bearish signals vs {} bullish signals",
                self.bearish, self.bullish
            ),
            Signal::Neutral => f.write_str("Neutral: Equal bullish and bearish signals"),
        }
    }
}

/// Position of the latest close relative to the 200-day moving average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LongTermTrend {
    /// Price strictly above MA200.
    Above,
    /// Price at or below MA200.
    Below,
}

impl fmt::Display for LongTermTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Above => "Price is above 200-day MA (Bullish)",
            Self::Below => "Price is below 200-day MA (Bearish)",
        })
    }
}

/// Label for an RSI reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RsiZone {
    /// Below the oversold threshold.
    Oversold,
    /// Above the overbought threshold.
    Overbought,
    /// Between the thresholds, inclusive.
    Neutral,
}

impl fmt::Display for RsiZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Oversold => "Oversold",
            Self::Overbought => "Overbought",
            Self::Neutral => "Neutral",
        })
    }
}
