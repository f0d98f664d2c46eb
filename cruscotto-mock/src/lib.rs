//! Deterministic stand-in for the dashboard's HTTP API.
//!
//! Each endpoint returns the raw JSON body the real API would send, so the
//! decoding and assembly code paths are exercised exactly as in production.
//!
//! Tickers:
//! - `AAPL`: clean history, linear and LSTM forecasts, every indicator.
//! - `MSFT`: history with a broken date and a null close, forecast with a null price.
//! - `NEWCO`: empty history, a forecast, and mostly-null indicators.
//! - `FAIL`: every endpoint fails with an upstream error.
use cruscotto_types::CruscottoError;

mod fixtures;

/// Mock API with static fixture payloads.
pub struct MockApi;

impl Default for MockApi {
    fn default() -> Self {
        Self::new()
    }
}

impl MockApi {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn not_found(what: String) -> CruscottoError {
        CruscottoError::not_found(what)
    }

    fn maybe_fail(ticker: &str, endpoint: &str) -> Result<(), CruscottoError> {
        match ticker {
            "FAIL" => Err(CruscottoError::Other(format!(
                "upstream error for {endpoint} of {ticker}"
            ))),
            _ => Ok(()),
        }
    }

    /// Body of `GET /stock/{ticker}/history`.
    ///
    /// # Errors
    /// `Other` for `FAIL`, `NotFound` for unknown tickers.
    pub fn history(&self, ticker: &str) -> Result<&'static str, CruscottoError> {
        Self::maybe_fail(ticker, "history")?;
        fixtures::history::by_symbol(ticker)
            .ok_or_else(|| Self::not_found(format!("history for {ticker}")))
    }

    /// Body of `GET /stock/{ticker}/predict/{method}` (`linear` or `lstm`).
    ///
    /// # Errors
    /// `InvalidArg` for an unknown method, `Other` for `FAIL`, `NotFound` for
    /// unknown tickers.
    pub fn prediction(&self, ticker: &str, method: &str) -> Result<&'static str, CruscottoError> {
        if !matches!(method, "linear" | "lstm") {
            return Err(CruscottoError::invalid_arg(format!(
                "unknown prediction method: {method}"
            )));
        }
        Self::maybe_fail(ticker, "prediction")?;
        fixtures::prediction::by_symbol(ticker, method)
            .ok_or_else(|| Self::not_found(format!("{method} prediction for {ticker}")))
    }

    /// Body of `GET /stock/{ticker}/indicators`.
    ///
    /// # Errors
    /// `Other` for `FAIL`, `NotFound` for unknown tickers.
    pub fn indicators(&self, ticker: &str) -> Result<&'static str, CruscottoError> {
        Self::maybe_fail(ticker, "indicators")?;
        fixtures::indicators::by_symbol(ticker)
            .ok_or_else(|| Self::not_found(format!("indicators for {ticker}")))
    }
}
