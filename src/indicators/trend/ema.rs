//! EMA (Exponential Moving Average) indicator

/// Smoothing factor for a span: α = 2 / (span + 1).
pub fn ema_alpha(span: usize) -> f64 {
    2.0 / (span as f64 + 1.0)
}

/// Exponential moving average seeded with the first value.
///
/// EMA[0] = x[0], EMA[i] = x[i]·α + EMA[i-1]·(1-α). The update is applied
/// as `prev + α·(x - prev)`, which keeps a constant input exactly constant.
pub fn calculate_ema(values: &[f64], span: usize) -> Vec<f64> {
    let alpha = ema_alpha(span);
    let mut out = Vec::with_capacity(values.len());

    let mut iter = values.iter();
    let Some(&first) = iter.next() else {
        return out;
    };
    out.push(first);

    let mut prev = first;
    for &value in iter {
        prev += alpha * (value - prev);
        out.push(prev);
    }
    out
}
