//! Unit tests for alert reports

use stockpulse::models::alert::{AlertFailure, AlertReport, AlertResult};
use stockpulse::models::signal::{Signal, SignalKind, SignalSource};

#[test]
fn test_signals_message_lists_each_signal() {
    let report = AlertReport::new(
        "MSFT",
        AlertResult::from_signals(vec![
            Signal::new(
                SignalKind::Buy,
                SignalSource::MovingAverage,
                "Buy signal from Moving Average Crossover (SMA 50 > SMA 200).",
            ),
            Signal::new(
                SignalKind::Sell,
                SignalSource::Rsi,
                "Sell signal from RSI (RSI > 70).",
            ),
        ]),
    );
    assert_eq!(
        report.message(),
        "Signals for MSFT:\nBuy signal from Moving Average Crossover (SMA 50 > SMA 200).\nSell signal from RSI (RSI > 70)."
    );
    assert_eq!(report.signals().len(), 2);
}

#[test]
fn test_empty_signals_become_no_signals() {
    let result = AlertResult::from_signals(Vec::new());
    assert_eq!(result, AlertResult::NoSignals);
    let report = AlertReport::new("MSFT", result);
    assert_eq!(report.message(), "No significant signals for MSFT.");
    assert!(report.signals().is_empty());
    assert!(!report.result.is_failure());
}

#[test]
fn test_failure_messages() {
    let cases = [
        (
            AlertFailure::InsufficientData { bars: 12 },
            "Not enough data for XYZ.",
        ),
        (AlertFailure::UnknownTicker, "Unknown ticker XYZ."),
        (
            AlertFailure::FetchFailure("network error: connection refused".to_string()),
            "Error fetching data for XYZ: network error: connection refused",
        ),
    ];
    for (failure, expected) in cases {
        let report = AlertReport::new("XYZ", AlertResult::Failed(failure));
        assert!(report.result.is_failure());
        assert_eq!(report.message(), expected);
    }
}
