//! Stockpulse alert bot
//!
//! Sends the daily signal summary for the configured ticker on weekday
//! mornings and answers `/stock`, `/company` and `/help` commands read from
//! standard input. Everything runs on a single-threaded runtime.

use dotenvy::dotenv;
use std::sync::Arc;
use stockpulse::config::{get_environment, AppConfig};
use stockpulse::core::bootstrap::build_context;
use stockpulse::core::runtime::AlertRuntime;
use stockpulse::core::scheduler::AlertScheduler;
use stockpulse::logging;
use tokio::io::{stdin, stdout, BufReader};
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    logging::init_logging();

    let env = get_environment();
    info!("Starting Stockpulse");
    info!(environment = %env, "Environment");

    let config = AppConfig::from_env()?;
    info!(
        ticker = %config.schedule.ticker,
        hour = config.schedule.hour,
        minute = config.schedule.minute,
        weekdays = %config.schedule.weekdays,
        "Daily alert: {} at {:02}:{:02} local time ({})",
        config.schedule.ticker,
        config.schedule.hour,
        config.schedule.minute,
        config.schedule.weekdays
    );

    let ctx = Arc::new(build_context(&config)?);
    let scheduler = AlertScheduler::new(ctx.clone(), &config.schedule, config.channel_id.clone())?;
    let runtime = AlertRuntime::new(ctx, scheduler);

    info!("Ready, type /help for commands");
    runtime.run(BufReader::new(stdin()), stdout()).await?;

    info!("Stockpulse stopped");
    Ok(())
}
