//! Unit tests for price series validation

use crate::fixtures::{bars_from_closes, series_from_closes};
use stockpulse::indicators::IndicatorError;
use stockpulse::models::indicators::PriceSeries;

#[test]
fn test_series_accepts_increasing_dates() {
    let series = series_from_closes(&[1.0, 2.0, 3.0]);
    assert_eq!(series.len(), 3);
    assert_eq!(series.closes(), vec![1.0, 2.0, 3.0]);
    assert_eq!(series.last().map(|b| b.close), Some(3.0));
}

#[test]
fn test_series_rejects_duplicate_dates() {
    let mut bars = bars_from_closes(&[1.0, 2.0, 3.0]);
    bars[2].date = bars[1].date;
    assert_eq!(
        PriceSeries::new(bars),
        Err(IndicatorError::UnorderedSeries { index: 2 })
    );
}

#[test]
fn test_series_rejects_out_of_order_dates() {
    let mut bars = bars_from_closes(&[1.0, 2.0, 3.0, 4.0]);
    bars.swap(0, 1);
    assert_eq!(
        PriceSeries::new(bars),
        Err(IndicatorError::UnorderedSeries { index: 1 })
    );
}

#[test]
fn test_empty_series_is_valid() {
    let series = PriceSeries::new(Vec::new()).expect("empty series is ordered");
    assert!(series.is_empty());
}
