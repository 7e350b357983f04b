//! Shared data models spanning the engine layers.

pub mod alert;
pub mod indicators;
pub mod signal;

pub use alert::{AlertFailure, AlertReport, AlertResult};
pub use indicators::{IndicatorFrame, PriceBar, PriceSeries};
pub use signal::{Signal, SignalKind, SignalSource};
