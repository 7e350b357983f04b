//! Shared price series builders and in-memory collaborators for tests.
#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{Duration, NaiveDate};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use stockpulse::jobs::context::AppContext;
use stockpulse::jobs::pipeline::AlertPipeline;
use stockpulse::models::indicators::{PriceBar, PriceSeries};
use stockpulse::services::company_directory::CompanyDirectory;
use stockpulse::services::error::{MarketDataError, NotifyError};
use stockpulse::services::market_data::{Interval, Lookback, PriceSeriesProvider};
use stockpulse::services::notifier::NotificationSink;
use tokio::sync::{Mutex, Notify};

pub fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 2).expect("valid date")
}

pub fn bars_from_closes(closes: &[f64]) -> Vec<PriceBar> {
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            PriceBar::new(
                start_date() + Duration::days(i as i64),
                close,
                close + 1.0,
                close - 1.0,
                close,
                1_000_000.0,
            )
        })
        .collect()
}

pub fn series_from_closes(closes: &[f64]) -> PriceSeries {
    PriceSeries::new(bars_from_closes(closes)).expect("fixture bars are ordered")
}

/// Closes rising in equal steps from `from` to `to`.
pub fn linear_closes(count: usize, from: f64, to: f64) -> Vec<f64> {
    let step = (to - from) / (count - 1) as f64;
    (0..count).map(|i| from + step * i as f64).collect()
}

pub fn flat_closes(count: usize, value: f64) -> Vec<f64> {
    vec![value; count]
}

/// Flat at 200 with the last `tail` closes each one lower than the last.
pub fn falling_tail_closes(count: usize, tail: usize) -> Vec<f64> {
    let flat = count - tail;
    (0..count)
        .map(|i| {
            if i < flat {
                200.0
            } else {
                200.0 - (i - flat + 1) as f64
            }
        })
        .collect()
}

/// Deterministic oscillating series with a mild upward drift.
pub fn zigzag_closes(count: usize) -> Vec<f64> {
    (0..count)
        .map(|i| {
            let x = i as f64;
            100.0 + 8.0 * (x * 0.37).sin() + 3.0 * (x * 1.3).cos() + 0.05 * x
        })
        .collect()
}

/// Provider returning the same response on every call.
pub struct StaticProvider {
    response: Result<Vec<PriceBar>, MarketDataError>,
    calls: AtomicUsize,
}

impl StaticProvider {
    pub fn ok(bars: Vec<PriceBar>) -> Self {
        Self {
            response: Ok(bars),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn err(error: MarketDataError) -> Self {
        Self {
            response: Err(error),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PriceSeriesProvider for StaticProvider {
    async fn fetch(
        &self,
        _ticker: &str,
        _lookback: Lookback,
        _interval: Interval,
    ) -> Result<Vec<PriceBar>, MarketDataError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response.clone()
    }
}

/// Provider that blocks inside `fetch` until released.
pub struct GatedProvider {
    bars: Vec<PriceBar>,
    pub started: Notify,
    pub release: Notify,
}

impl GatedProvider {
    pub fn new(bars: Vec<PriceBar>) -> Self {
        Self {
            bars,
            started: Notify::new(),
            release: Notify::new(),
        }
    }
}

#[async_trait]
impl PriceSeriesProvider for GatedProvider {
    async fn fetch(
        &self,
        _ticker: &str,
        _lookback: Lookback,
        _interval: Interval,
    ) -> Result<Vec<PriceBar>, MarketDataError> {
        self.started.notify_one();
        self.release.notified().await;
        Ok(self.bars.clone())
    }
}

/// Provider that never answers.
pub struct HangingProvider;

#[async_trait]
impl PriceSeriesProvider for HangingProvider {
    async fn fetch(
        &self,
        _ticker: &str,
        _lookback: Lookback,
        _interval: Interval,
    ) -> Result<Vec<PriceBar>, MarketDataError> {
        std::future::pending().await
    }
}

/// Sink that records every message, optionally failing each send.
#[derive(Default)]
pub struct RecordingSink {
    sent: Mutex<Vec<(String, String)>>,
    fail: bool,
}

impl RecordingSink {
    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub async fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().await.clone()
    }
}

#[async_trait]
impl NotificationSink for RecordingSink {
    async fn send(&self, destination: &str, text: &str) -> Result<(), NotifyError> {
        if self.fail {
            return Err(NotifyError::Platform("channel unavailable".to_string()));
        }
        self.sent
            .lock()
            .await
            .push((destination.to_string(), text.to_string()));
        Ok(())
    }
}

pub fn context_with(
    provider: Arc<dyn PriceSeriesProvider>,
    sink: Arc<dyn NotificationSink>,
) -> Arc<AppContext> {
    Arc::new(AppContext::new(
        Arc::new(AlertPipeline::new(provider)),
        sink,
        Arc::new(CompanyDirectory::default()),
    ))
}
