//! Single-ticker alert pipeline: fetch → indicators → signals → report.
//!
//! Every failure is folded into an [`AlertResult::Failed`] so callers never
//! see a raw provider or indicator error.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error, info, warn};

use crate::indicators::{IndicatorEngine, IndicatorError};
use crate::models::alert::{AlertFailure, AlertReport, AlertResult};
use crate::models::indicators::{PriceBar, PriceSeries};
use crate::models::signal::Signal;
use crate::services::error::MarketDataError;
use crate::services::market_data::{Interval, Lookback, PriceSeriesProvider};
use crate::signals::SignalGenerator;

pub struct AlertPipeline {
    provider: Arc<dyn PriceSeriesProvider>,
    engine: IndicatorEngine,
    generator: SignalGenerator,
    lookback: Lookback,
    interval: Interval,
    fetch_timeout: Option<Duration>,
}

impl AlertPipeline {
    pub fn new(provider: Arc<dyn PriceSeriesProvider>) -> Self {
        Self {
            provider,
            engine: IndicatorEngine::new(),
            generator: SignalGenerator::default(),
            lookback: Lookback::OneYear,
            interval: Interval::Day1,
            fetch_timeout: None,
        }
    }

    /// Bound each provider call. Without a timeout an unresponsive provider
    /// blocks the invocation indefinitely.
    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = Some(timeout);
        self
    }

    pub fn with_engine(mut self, engine: IndicatorEngine) -> Self {
        self.engine = engine;
        self
    }

    pub fn with_generator(mut self, generator: SignalGenerator) -> Self {
        self.generator = generator;
        self
    }

    /// Run the full pipeline for one ticker.
    pub async fn run(&self, ticker: &str) -> AlertReport {
        let ticker = ticker.trim().to_uppercase();
        info!(ticker = %ticker, "AlertPipeline: fetching data for {}", ticker);

        let result = match self.fetch(&ticker).await {
            Ok(bars) => match self.evaluate(bars) {
                Ok(signals) => AlertResult::from_signals(signals),
                Err(failure) => AlertResult::Failed(failure),
            },
            Err(failure) => AlertResult::Failed(failure),
        };

        match &result {
            AlertResult::Signals(signals) => {
                info!(ticker = %ticker, count = signals.len(), "AlertPipeline: {} signals for {}", signals.len(), ticker);
            }
            AlertResult::NoSignals => {
                info!(ticker = %ticker, "AlertPipeline: no significant signals for {}", ticker);
            }
            AlertResult::Failed(failure) => {
                warn!(ticker = %ticker, failure = ?failure, "AlertPipeline: no alert for {}", ticker);
            }
        }

        AlertReport::new(ticker, result)
    }

    async fn fetch(&self, ticker: &str) -> Result<Vec<PriceBar>, AlertFailure> {
        let request = self.provider.fetch(ticker, self.lookback, self.interval);
        let outcome = match self.fetch_timeout {
            Some(limit) => match tokio::time::timeout(limit, request).await {
                Ok(outcome) => outcome,
                Err(_) => Err(MarketDataError::Timeout(limit)),
            },
            None => request.await,
        };

        outcome.map_err(|e| match e {
            MarketDataError::NotFound => {
                warn!(ticker = %ticker, "AlertPipeline: provider does not know {}", ticker);
                AlertFailure::UnknownTicker
            }
            other => {
                error!(ticker = %ticker, error = %other, "AlertPipeline: error fetching data for {}", ticker);
                AlertFailure::FetchFailure(other.to_string())
            }
        })
    }

    /// Synchronous part: validate, compute, and read the latest frame.
    fn evaluate(&self, bars: Vec<PriceBar>) -> Result<Vec<Signal>, AlertFailure> {
        let required = self.engine.params().min_bars();
        if bars.len() < required {
            debug!(count = bars.len(), min = required, "AlertPipeline: not enough bars ({} < {})", bars.len(), required);
            return Err(AlertFailure::InsufficientData { bars: bars.len() });
        }

        let series = PriceSeries::new(bars).map_err(indicator_failure)?;
        let frame = self.engine.latest(&series).map_err(indicator_failure)?;

        debug!(
            date = %frame.date,
            close = frame.close,
            sma_50 = ?frame.sma_50,
            sma_200 = ?frame.sma_200,
            rsi = ?frame.rsi_14,
            macd = frame.macd,
            signal_line = frame.signal_line,
            "AlertPipeline: latest indicator frame"
        );

        Ok(self.generator.generate(&frame))
    }
}

fn indicator_failure(err: IndicatorError) -> AlertFailure {
    match err {
        IndicatorError::InsufficientData { actual, .. } => {
            AlertFailure::InsufficientData { bars: actual }
        }
        IndicatorError::UnorderedSeries { .. } => AlertFailure::FetchFailure(err.to_string()),
    }
}
