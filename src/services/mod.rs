//! Adapters around the outside world: price history, notification delivery
//! and the company name directory.

pub mod company_directory;
pub mod discord;
pub mod error;
pub mod market_data;
pub mod notifier;
pub mod yahoo;

pub use company_directory::{CompanyDirectory, DirectoryError};
pub use discord::DiscordSink;
pub use error::{MarketDataError, NotifyError};
pub use market_data::{Interval, Lookback, PriceSeriesProvider};
pub use notifier::{LogSink, NotificationSink};
pub use yahoo::YahooChartProvider;
