//! SMA (Simple Moving Average) indicator

/// Neumaier-compensated running sum.
#[derive(Debug, Default, Clone, Copy)]
struct CompensatedSum {
    sum: f64,
    compensation: f64,
}

impl CompensatedSum {
    fn add(&mut self, x: f64) {
        let t = self.sum + x;
        if self.sum.abs() >= x.abs() {
            self.compensation += (self.sum - t) + x;
        } else {
            self.compensation += (x - t) + self.sum;
        }
        self.sum = t;
    }

    fn value(&self) -> f64 {
        self.sum + self.compensation
    }
}

/// Trailing simple moving average, one entry per input value.
///
/// Entries before `window - 1` are `None`. A window holding a single
/// repeated value averages to exactly that value.
pub fn calculate_sma(values: &[f64], window: usize) -> Vec<Option<f64>> {
    let values: Vec<Option<f64>> = values.iter().copied().map(Some).collect();
    calculate_sma_partial(&values, window)
}

/// Trailing SMA over a series whose leading entries may be undefined.
///
/// An entry is defined only when its whole window is defined.
pub fn calculate_sma_partial(values: &[Option<f64>], window: usize) -> Vec<Option<f64>> {
    if window == 0 {
        return vec![None; values.len()];
    }

    let mut result = Vec::with_capacity(values.len());
    let mut sum = CompensatedSum::default();
    // consecutive defined values ending at the current index
    let mut defined = 0usize;
    // consecutive equal values ending at the current index
    let mut run = 0usize;
    let mut previous: Option<f64> = None;

    for (i, value) in values.iter().enumerate() {
        let Some(x) = *value else {
            sum = CompensatedSum::default();
            defined = 0;
            run = 0;
            previous = None;
            result.push(None);
            continue;
        };

        run = if previous == Some(x) { run + 1 } else { 1 };
        previous = Some(x);
        defined += 1;
        sum.add(x);
        if defined > window {
            if let Some(leaving) = values[i - window] {
                sum.add(-leaving);
            }
        }

        let mean = if defined < window {
            None
        } else if run >= window {
            Some(x)
        } else {
            Some(sum.value() / window as f64)
        };
        result.push(mean);
    }

    result
}
