use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::indicators::IndicatorError;

/// One trading day of OHLCV data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl PriceBar {
    pub fn new(date: NaiveDate, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume,
        }
    }
}

/// Daily bars ordered by strictly increasing date.
///
/// The ordering is checked once at construction; nothing downstream
/// reorders or drops bars.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceSeries {
    bars: Vec<PriceBar>,
}

impl PriceSeries {
    pub fn new(bars: Vec<PriceBar>) -> Result<Self, IndicatorError> {
        if let Some(index) = bars
            .windows(2)
            .position(|pair| pair[1].date <= pair[0].date)
        {
            return Err(IndicatorError::UnorderedSeries { index: index + 1 });
        }
        Ok(Self { bars })
    }

    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn last(&self) -> Option<&PriceBar> {
        self.bars.last()
    }
}

/// Indicator values attached to a single bar.
///
/// `None` marks a value without enough history at that index. The EMA
/// family is seeded from the first close and is defined everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorFrame {
    pub date: NaiveDate,
    pub close: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sma_50: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sma_200: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsi_14: Option<f64>,
    pub ema_12: f64,
    pub ema_26: f64,
    pub macd: f64,
    pub signal_line: f64,
}

impl IndicatorFrame {
    pub fn histogram(&self) -> f64 {
        self.macd - self.signal_line
    }
}
