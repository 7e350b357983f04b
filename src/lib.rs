//! Stockpulse: daily technical-analysis alerts for equity tickers.
//!
//! Price history flows through the indicator engine and the signal
//! generator inside [`jobs::pipeline::AlertPipeline`], which is shared by the
//! weekday scheduler and the on-demand command layer.

pub mod config;
pub mod core;
pub mod indicators;
pub mod jobs;
pub mod logging;
pub mod models;
pub mod services;
pub mod signals;
