//! Outcome of one pipeline invocation and its user-facing text.

use serde::Serialize;

use crate::models::signal::Signal;

/// Why a pipeline invocation produced no signals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum AlertFailure {
    InsufficientData { bars: usize },
    FetchFailure(String),
    UnknownTicker,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum AlertResult {
    /// Never empty; an empty rule output becomes `NoSignals`.
    Signals(Vec<Signal>),
    NoSignals,
    Failed(AlertFailure),
}

impl AlertResult {
    pub fn from_signals(signals: Vec<Signal>) -> Self {
        if signals.is_empty() {
            AlertResult::NoSignals
        } else {
            AlertResult::Signals(signals)
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, AlertResult::Failed(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlertReport {
    pub ticker: String,
    pub result: AlertResult,
}

impl AlertReport {
    pub fn new(ticker: impl Into<String>, result: AlertResult) -> Self {
        Self {
            ticker: ticker.into(),
            result,
        }
    }

    pub fn signals(&self) -> &[Signal] {
        match &self.result {
            AlertResult::Signals(signals) => signals,
            _ => &[],
        }
    }

    /// Render the report as the chat message sent to users.
    pub fn message(&self) -> String {
        let ticker = &self.ticker;
        match &self.result {
            AlertResult::Signals(signals) => {
                let lines: Vec<&str> = signals.iter().map(|s| s.text.as_str()).collect();
                format!("Signals for {}:\n{}", ticker, lines.join("\n"))
            }
            AlertResult::NoSignals => format!("No significant signals for {}.", ticker),
            AlertResult::Failed(AlertFailure::InsufficientData { .. }) => {
                format!("Not enough data for {}.", ticker)
            }
            AlertResult::Failed(AlertFailure::UnknownTicker) => {
                format!("Unknown ticker {}.", ticker)
            }
            AlertResult::Failed(AlertFailure::FetchFailure(reason)) => {
                format!("Error fetching data for {}: {}", ticker, reason)
            }
        }
    }
}
