//! MACD (Moving Average Convergence Divergence) indicator
//!
//! MACD = EMA(12) - EMA(26)
//! Signal = EMA(9) of MACD

use crate::indicators::trend::calculate_ema;

/// Full MACD family, one entry per close.
#[derive(Debug, Clone, PartialEq)]
pub struct MacdSeries {
    pub fast_ema: Vec<f64>,
    pub slow_ema: Vec<f64>,
    pub macd: Vec<f64>,
    pub signal: Vec<f64>,
}

pub fn calculate_macd(
    closes: &[f64],
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
) -> MacdSeries {
    let fast_ema = calculate_ema(closes, fast_period);
    let slow_ema = calculate_ema(closes, slow_period);

    let macd: Vec<f64> = fast_ema
        .iter()
        .zip(&slow_ema)
        .map(|(fast, slow)| fast - slow)
        .collect();

    // Seeded on MACD[0] exactly like the price EMAs.
    let signal = calculate_ema(&macd, signal_period);

    MacdSeries {
        fast_ema,
        slow_ema,
        macd,
        signal,
    }
}

/// Calculate MACD with default periods (12, 26, 9)
pub fn calculate_macd_default(closes: &[f64]) -> MacdSeries {
    calculate_macd(closes, 12, 26, 9)
}
