//! Market data provider interface.

use async_trait::async_trait;
use std::fmt;

use crate::models::indicators::PriceBar;
use crate::services::error::MarketDataError;

/// How far back to request history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lookback {
    SixMonths,
    #[default]
    OneYear,
    TwoYears,
}

impl fmt::Display for Lookback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lookback::SixMonths => write!(f, "6mo"),
            Lookback::OneYear => write!(f, "1y"),
            Lookback::TwoYears => write!(f, "2y"),
        }
    }
}

/// Bar width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interval {
    #[default]
    Day1,
    Week1,
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Interval::Day1 => write!(f, "1d"),
            Interval::Week1 => write!(f, "1wk"),
        }
    }
}

#[async_trait]
pub trait PriceSeriesProvider: Send + Sync {
    /// Get historical bars for a symbol, oldest first.
    ///
    /// An empty vector means the provider had nothing for the window and is
    /// treated like too little history. `MarketDataError::NotFound` is
    /// reserved for symbols the provider does not recognise.
    async fn fetch(
        &self,
        ticker: &str,
        lookback: Lookback,
        interval: Interval,
    ) -> Result<Vec<PriceBar>, MarketDataError>;
}
