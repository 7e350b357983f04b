//! Yahoo Finance chart API price history provider.

use async_trait::async_trait;
use chrono::DateTime;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::models::indicators::PriceBar;
use crate::services::error::MarketDataError;
use crate::services::market_data::{Interval, Lookback, PriceSeriesProvider};

pub const DEFAULT_YAHOO_BASE_URL: &str = "https://query1.finance.yahoo.com";

const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

#[derive(Clone)]
pub struct YahooChartProvider {
    base_url: String,
    client: Client,
}

impl YahooChartProvider {
    pub fn new(base_url: impl Into<String>) -> Result<Self, MarketDataError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| MarketDataError::Network(e.to_string()))?;
        Ok(Self::with_client(base_url, client))
    }

    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        }
    }

    fn chart_url(&self, ticker: &str) -> String {
        format!("{}/v8/finance/chart/{}", self.base_url, ticker)
    }
}

#[derive(Deserialize, Debug)]
struct ChartResponse {
    chart: Chart,
}

#[derive(Deserialize, Debug)]
struct Chart {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartError>,
}

#[derive(Deserialize, Debug)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Deserialize, Debug)]
struct ChartResult {
    #[serde(default)]
    meta: Option<ChartMeta>,
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: ChartIndicators,
}

#[derive(Deserialize, Debug)]
struct ChartMeta {
    #[serde(default)]
    gmtoffset: i64,
}

#[derive(Deserialize, Debug)]
struct ChartIndicators {
    #[serde(default)]
    quote: Vec<ChartQuote>,
}

#[derive(Deserialize, Debug, Default)]
struct ChartQuote {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
    #[serde(default)]
    volume: Vec<Option<f64>>,
}

fn value_at(column: &[Option<f64>], i: usize) -> Option<f64> {
    column.get(i).copied().flatten()
}

fn is_not_found(error: &ChartError) -> bool {
    error.code.eq_ignore_ascii_case("Not Found")
}

/// Turn a chart result into daily bars.
///
/// Rows without a close are dropped. Dates are taken in the exchange's
/// timezone; if the feed repeats a date the later row wins.
fn bars_from_result(result: ChartResult) -> Vec<PriceBar> {
    let offset = result.meta.map(|m| m.gmtoffset).unwrap_or(0);
    let quote = result.indicators.quote.into_iter().next().unwrap_or_default();

    let mut bars: Vec<PriceBar> = Vec::with_capacity(result.timestamp.len());
    for (i, ts) in result.timestamp.iter().enumerate() {
        let Some(close) = value_at(&quote.close, i) else {
            continue;
        };
        let Some(date) = DateTime::from_timestamp(ts + offset, 0).map(|d| d.date_naive()) else {
            continue;
        };
        bars.push(PriceBar::new(
            date,
            value_at(&quote.open, i).unwrap_or(close),
            value_at(&quote.high, i).unwrap_or(close),
            value_at(&quote.low, i).unwrap_or(close),
            close,
            value_at(&quote.volume, i).unwrap_or(0.0),
        ));
    }

    bars.sort_by_key(|b| b.date);
    let mut deduped: Vec<PriceBar> = Vec::with_capacity(bars.len());
    for bar in bars {
        match deduped.last_mut() {
            Some(last) if last.date == bar.date => *last = bar,
            _ => deduped.push(bar),
        }
    }
    deduped
}

#[async_trait]
impl PriceSeriesProvider for YahooChartProvider {
    async fn fetch(
        &self,
        ticker: &str,
        lookback: Lookback,
        interval: Interval,
    ) -> Result<Vec<PriceBar>, MarketDataError> {
        let url = self.chart_url(ticker);
        let range = lookback.to_string();
        let interval = interval.to_string();

        debug!(ticker = %ticker, range = %range, interval = %interval, "YahooChartProvider: requesting chart for {}", ticker);

        let resp = self
            .client
            .get(&url)
            .query(&[("range", range.as_str()), ("interval", interval.as_str())])
            .send()
            .await
            .map_err(|e| MarketDataError::Network(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| MarketDataError::Network(e.to_string()))?;

        if status == StatusCode::NOT_FOUND {
            return Err(MarketDataError::NotFound);
        }

        let parsed = match serde_json::from_str::<ChartResponse>(&body) {
            Ok(parsed) => parsed,
            Err(_) if !status.is_success() => {
                return Err(MarketDataError::Network(format!("HTTP {}", status)));
            }
            Err(e) => return Err(MarketDataError::Parse(e.to_string())),
        };

        if let Some(error) = parsed.chart.error {
            if is_not_found(&error) {
                return Err(MarketDataError::NotFound);
            }
            return Err(MarketDataError::Network(error.description));
        }

        if !status.is_success() {
            return Err(MarketDataError::Network(format!("HTTP {}", status)));
        }

        let bars = parsed
            .chart
            .result
            .and_then(|results| results.into_iter().next())
            .map(bars_from_result)
            .unwrap_or_default();

        debug!(ticker = %ticker, count = bars.len(), "YahooChartProvider: parsed {} bars for {}", bars.len(), ticker);
        Ok(bars)
    }
}
