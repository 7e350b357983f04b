//! RSI (Relative Strength Index) indicator
//!
//! RSI = 100 - (100 / (1 + RS))
//! RS  = Average Gain / Average Loss, both as simple means over the window.

use crate::indicators::trend::calculate_sma_partial;

pub const RSI_MAX: f64 = 100.0;
pub const RSI_NEUTRAL: f64 = 50.0;

/// RSI from average gain and loss.
///
/// A zero average loss has no finite RS: the result is 100 when there were
/// gains and 50 when the window saw no movement at all.
pub fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        if avg_gain > 0.0 {
            return RSI_MAX;
        }
        return RSI_NEUTRAL;
    }

    let rs = avg_gain / avg_loss;
    100.0 - (100.0 / (1.0 + rs))
}

/// RSI for every close. Index 0 has no delta, so the first defined value is
/// at index `window`.
pub fn calculate_rsi(closes: &[f64], window: usize) -> Vec<Option<f64>> {
    let mut gains = Vec::with_capacity(closes.len());
    let mut losses = Vec::with_capacity(closes.len());

    for i in 0..closes.len() {
        if i == 0 {
            gains.push(None);
            losses.push(None);
            continue;
        }
        let change = closes[i] - closes[i - 1];
        gains.push(Some(change.max(0.0)));
        losses.push(Some((-change).max(0.0)));
    }

    let avg_gains = calculate_sma_partial(&gains, window);
    let avg_losses = calculate_sma_partial(&losses, window);

    avg_gains
        .into_iter()
        .zip(avg_losses)
        .map(|(gain, loss)| Some(rsi_from_averages(gain?, loss?)))
        .collect()
}

/// Calculate RSI with default period (14)
pub fn calculate_rsi_default(closes: &[f64]) -> Vec<Option<f64>> {
    calculate_rsi(closes, 14)
}
