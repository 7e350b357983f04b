//! Integration tests for the alert pipeline

use std::sync::Arc;
use std::time::Duration;

use crate::fixtures::{
    bars_from_closes, flat_closes, linear_closes, zigzag_closes, HangingProvider, StaticProvider,
};
use stockpulse::indicators::{IndicatorEngine, IndicatorParams};
use stockpulse::jobs::pipeline::AlertPipeline;
use stockpulse::models::alert::{AlertFailure, AlertResult};
use stockpulse::models::signal::{SignalKind, SignalSource};
use stockpulse::services::error::MarketDataError;
use stockpulse::signals::{SignalGenerator, SignalThresholds};

#[tokio::test]
async fn short_history_reports_insufficient_data() {
    let pipeline = AlertPipeline::new(Arc::new(StaticProvider::ok(bars_from_closes(
        &zigzag_closes(150),
    ))));
    let report = pipeline.run("AAPL").await;

    assert_eq!(
        report.result,
        AlertResult::Failed(AlertFailure::InsufficientData { bars: 150 })
    );
    assert_eq!(report.message(), "Not enough data for AAPL.");
}

#[tokio::test]
async fn empty_history_reports_insufficient_data() {
    let pipeline = AlertPipeline::new(Arc::new(StaticProvider::ok(Vec::new())));
    let report = pipeline.run("AAPL").await;
    assert_eq!(
        report.result,
        AlertResult::Failed(AlertFailure::InsufficientData { bars: 0 })
    );
}

#[tokio::test]
async fn unknown_symbol_reports_unknown_ticker() {
    let pipeline = AlertPipeline::new(Arc::new(StaticProvider::err(MarketDataError::NotFound)));
    let report = pipeline.run("NOPE").await;
    assert_eq!(report.result, AlertResult::Failed(AlertFailure::UnknownTicker));
    assert_eq!(report.message(), "Unknown ticker NOPE.");
}

#[tokio::test]
async fn provider_error_reports_fetch_failure() {
    let pipeline = AlertPipeline::new(Arc::new(StaticProvider::err(MarketDataError::Network(
        "connection refused".to_string(),
    ))));
    let report = pipeline.run("AAPL").await;
    assert_eq!(
        report.result,
        AlertResult::Failed(AlertFailure::FetchFailure(
            "network error: connection refused".to_string()
        ))
    );
    assert_eq!(
        report.message(),
        "Error fetching data for AAPL: network error: connection refused"
    );
}

#[tokio::test]
async fn slow_provider_times_out() {
    let pipeline = AlertPipeline::new(Arc::new(HangingProvider))
        .with_fetch_timeout(Duration::from_millis(50));
    let report = pipeline.run("AAPL").await;
    assert_eq!(
        report.result,
        AlertResult::Failed(AlertFailure::FetchFailure(
            "request timed out after 50ms".to_string()
        ))
    );
}

#[tokio::test]
async fn unordered_history_reports_fetch_failure() {
    let mut bars = bars_from_closes(&zigzag_closes(252));
    bars[100].date = bars[99].date;
    let pipeline = AlertPipeline::new(Arc::new(StaticProvider::ok(bars)));

    let report = pipeline.run("AAPL").await;
    assert!(matches!(
        report.result,
        AlertResult::Failed(AlertFailure::FetchFailure(ref reason)) if reason.contains("index 100")
    ));
}

#[tokio::test]
async fn rising_history_reports_signals() {
    let pipeline = AlertPipeline::new(Arc::new(StaticProvider::ok(bars_from_closes(
        &linear_closes(252, 100.0, 200.0),
    ))));
    let report = pipeline.run(" aapl ").await;

    assert_eq!(report.ticker, "AAPL");
    let signals = report.signals();
    assert_eq!(signals[0].kind, SignalKind::Buy);
    assert_eq!(signals[0].source, SignalSource::MovingAverage);
    assert!(report
        .message()
        .starts_with("Signals for AAPL:\nBuy signal from Moving Average Crossover (SMA 50 > SMA 200)."));
}

#[tokio::test]
async fn flat_history_reports_no_signals() {
    let pipeline = AlertPipeline::new(Arc::new(StaticProvider::ok(bars_from_closes(
        &flat_closes(252, 150.0),
    ))));
    let report = pipeline.run("KO").await;
    assert_eq!(report.result, AlertResult::NoSignals);
    assert_eq!(report.message(), "No significant signals for KO.");
}

#[tokio::test]
async fn custom_engine_and_thresholds() {
    let bars = bars_from_closes(&linear_closes(60, 100.0, 200.0));

    let default_report = AlertPipeline::new(Arc::new(StaticProvider::ok(bars.clone())))
        .run("AAPL")
        .await;
    assert_eq!(
        default_report.result,
        AlertResult::Failed(AlertFailure::InsufficientData { bars: 60 })
    );

    let params = IndicatorParams {
        sma_fast: 10,
        sma_slow: 40,
        ..IndicatorParams::default()
    };
    let pipeline = AlertPipeline::new(Arc::new(StaticProvider::ok(bars)))
        .with_engine(IndicatorEngine::with_params(params))
        .with_generator(SignalGenerator::new(SignalThresholds {
            rsi_oversold: 0.0,
            rsi_overbought: 100.0,
        }));
    let report = pipeline.run("AAPL").await;

    let signals = report.signals();
    assert_eq!(signals[0].kind, SignalKind::Buy);
    assert_eq!(signals[0].source, SignalSource::MovingAverage);
    // RSI sits at 100 on a steady rise, which no longer exceeds the bound
    assert!(signals.iter().all(|s| s.source != SignalSource::Rsi));
}
