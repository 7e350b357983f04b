use std::cmp::Ordering;

use crate::models::indicators::IndicatorFrame;
use crate::models::signal::{Signal, SignalKind, SignalSource};

/// RSI levels for the threshold rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalThresholds {
    pub rsi_oversold: f64,
    pub rsi_overbought: f64,
}

impl Default for SignalThresholds {
    fn default() -> Self {
        Self {
            rsi_oversold: 30.0,
            rsi_overbought: 70.0,
        }
    }
}

/// Applies the moving-average, RSI and MACD rules to a single frame.
///
/// Output is ordered MovingAverage, Rsi, Macd; each rule yields at most one
/// signal. An empty result means nothing fired.
#[derive(Debug, Clone, Default)]
pub struct SignalGenerator {
    thresholds: SignalThresholds,
}

impl SignalGenerator {
    pub fn new(thresholds: SignalThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &SignalThresholds {
        &self.thresholds
    }

    pub fn generate(&self, frame: &IndicatorFrame) -> Vec<Signal> {
        [
            self.analyze_moving_average(frame),
            self.analyze_rsi(frame),
            self.analyze_macd(frame),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    fn analyze_moving_average(&self, frame: &IndicatorFrame) -> Option<Signal> {
        let (fast, slow) = (frame.sma_50?, frame.sma_200?);
        match fast.partial_cmp(&slow)? {
            Ordering::Greater => Some(Signal::new(
                SignalKind::Buy,
                SignalSource::MovingAverage,
                "Buy signal from Moving Average Crossover (SMA 50 > SMA 200).",
            )),
            Ordering::Less => Some(Signal::new(
                SignalKind::Sell,
                SignalSource::MovingAverage,
                "Sell signal from Moving Average Crossover (SMA 50 < SMA 200).",
            )),
            Ordering::Equal => None,
        }
    }

    fn analyze_rsi(&self, frame: &IndicatorFrame) -> Option<Signal> {
        let rsi = frame.rsi_14?;
        if rsi < self.thresholds.rsi_oversold {
            Some(Signal::new(
                SignalKind::Buy,
                SignalSource::Rsi,
                format!(
                    "Buy signal from RSI (RSI < {}).",
                    self.thresholds.rsi_oversold
                ),
            ))
        } else if rsi > self.thresholds.rsi_overbought {
            Some(Signal::new(
                SignalKind::Sell,
                SignalSource::Rsi,
                format!(
                    "Sell signal from RSI (RSI > {}).",
                    self.thresholds.rsi_overbought
                ),
            ))
        } else {
            None
        }
    }

    fn analyze_macd(&self, frame: &IndicatorFrame) -> Option<Signal> {
        match frame.macd.partial_cmp(&frame.signal_line)? {
            Ordering::Greater => Some(Signal::new(
                SignalKind::Buy,
                SignalSource::Macd,
                "Buy signal from MACD crossover (MACD > Signal Line).",
            )),
            Ordering::Less => Some(Signal::new(
                SignalKind::Sell,
                SignalSource::Macd,
                "Sell signal from MACD crossover (MACD < Signal Line).",
            )),
            Ordering::Equal => None,
        }
    }
}
