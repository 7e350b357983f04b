//! Builds the application context from configuration.

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::jobs::context::AppContext;
use crate::jobs::pipeline::AlertPipeline;
use crate::services::company_directory::{CompanyDirectory, DirectoryError};
use crate::services::discord::DiscordSink;
use crate::services::error::MarketDataError;
use crate::services::notifier::{LogSink, NotificationSink};
use crate::services::yahoo::YahooChartProvider;

#[derive(Error, Debug)]
pub enum BootstrapError {
    #[error("failed to initialise market data provider: {0}")]
    Provider(#[from] MarketDataError),

    #[error("failed to load company directory: {0}")]
    Directory(#[from] DirectoryError),
}

pub fn build_context(config: &AppConfig) -> Result<AppContext, BootstrapError> {
    let provider = Arc::new(YahooChartProvider::new(config.yahoo_base_url.clone())?);
    let pipeline = AlertPipeline::new(provider).with_fetch_timeout(config.fetch_timeout);

    let sink: Arc<dyn NotificationSink> = match &config.discord_token {
        Some(token) => {
            info!(api_base = %config.discord_api_base, "Delivering alerts to Discord");
            Arc::new(DiscordSink::with_client(
                config.discord_api_base.clone(),
                token.clone(),
                reqwest::Client::new(),
            ))
        }
        None => {
            warn!("DISCORD_TOKEN not set - alerts will only be logged");
            Arc::new(LogSink)
        }
    };

    let directory = match &config.company_directory_path {
        Some(path) => {
            let directory = CompanyDirectory::from_json_file(path)?;
            info!(path = %path.display(), entries = directory.len(), "Loaded company directory");
            directory
        }
        None => CompanyDirectory::default(),
    };

    Ok(AppContext::new(
        Arc::new(pipeline),
        sink,
        Arc::new(directory),
    ))
}
