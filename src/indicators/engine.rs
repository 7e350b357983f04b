//! Indicator engine: attaches SMA, RSI and MACD values to every bar.

use crate::indicators::error::IndicatorError;
use crate::indicators::momentum::{calculate_macd, calculate_rsi};
use crate::indicators::trend::calculate_sma;
use crate::models::indicators::{IndicatorFrame, PriceSeries};

/// Bars needed for the slowest default window (SMA 200).
pub const MIN_BARS: usize = 200;

/// Window lengths used by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorParams {
    pub sma_fast: usize,
    pub sma_slow: usize,
    pub rsi_window: usize,
    pub ema_fast: usize,
    pub ema_slow: usize,
    pub signal_span: usize,
}

impl IndicatorParams {
    /// Largest window consumed; shorter series are rejected.
    pub fn min_bars(&self) -> usize {
        [
            self.sma_fast,
            self.sma_slow,
            self.rsi_window + 1,
            self.ema_fast,
            self.ema_slow,
            self.signal_span,
        ]
        .into_iter()
        .max()
        .unwrap_or(MIN_BARS)
    }
}

impl Default for IndicatorParams {
    fn default() -> Self {
        Self {
            sma_fast: 50,
            sma_slow: 200,
            rsi_window: 14,
            ema_fast: 12,
            ema_slow: 26,
            signal_span: 9,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct IndicatorEngine {
    params: IndicatorParams,
}

impl IndicatorEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_params(params: IndicatorParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &IndicatorParams {
        &self.params
    }

    /// Compute one frame per bar, in bar order.
    ///
    /// Fails before any computation when the series is shorter than
    /// [`IndicatorParams::min_bars`]. The input is only read.
    pub fn compute(&self, series: &PriceSeries) -> Result<Vec<IndicatorFrame>, IndicatorError> {
        let required = self.params.min_bars();
        if series.len() < required {
            return Err(IndicatorError::InsufficientData {
                required,
                actual: series.len(),
            });
        }

        let closes = series.closes();
        let sma_fast = calculate_sma(&closes, self.params.sma_fast);
        let sma_slow = calculate_sma(&closes, self.params.sma_slow);
        let rsi = calculate_rsi(&closes, self.params.rsi_window);
        let macd = calculate_macd(
            &closes,
            self.params.ema_fast,
            self.params.ema_slow,
            self.params.signal_span,
        );

        let frames = series
            .bars()
            .iter()
            .enumerate()
            .map(|(i, bar)| IndicatorFrame {
                date: bar.date,
                close: bar.close,
                sma_50: sma_fast[i],
                sma_200: sma_slow[i],
                rsi_14: rsi[i],
                ema_12: macd.fast_ema[i],
                ema_26: macd.slow_ema[i],
                macd: macd.macd[i],
                signal_line: macd.signal[i],
            })
            .collect();

        Ok(frames)
    }

    /// Compute and keep only the most recent frame.
    pub fn latest(&self, series: &PriceSeries) -> Result<IndicatorFrame, IndicatorError> {
        let frames = self.compute(series)?;
        frames.last().copied().ok_or(IndicatorError::InsufficientData {
            required: self.params.min_bars(),
            actual: 0,
        })
    }
}
