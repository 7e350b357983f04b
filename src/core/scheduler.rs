//! Cron-based scheduler for the daily alert

use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Local};
use cron::Schedule;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{error, info, warn};

use crate::config::ScheduleConfig;
use crate::jobs::context::AppContext;
use crate::models::alert::{AlertFailure, AlertResult};
use crate::services::error::NotifyError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchedulerError {
    #[error("invalid cron expression '{expr}': {reason}")]
    InvalidCron { expr: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    Idle,
    Running,
}

/// What a single firing did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FireOutcome {
    Delivered,
    /// The pipeline failed; the failure was logged and nothing was sent.
    Suppressed(AlertFailure),
    DeliveryFailed(NotifyError),
    /// A previous firing was still in flight.
    Skipped,
}

/// Marks the job as running for as long as it is held.
struct RunningGuard<'a>(&'a AtomicBool);

impl<'a> RunningGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for RunningGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

struct AlertJob {
    ctx: Arc<AppContext>,
    ticker: String,
    destination: String,
    running: AtomicBool,
}

impl AlertJob {
    async fn fire(&self) -> FireOutcome {
        let Some(_guard) = RunningGuard::acquire(&self.running) else {
            warn!(ticker = %self.ticker, "AlertScheduler: previous alert for {} still running, skipping this firing", self.ticker);
            return FireOutcome::Skipped;
        };

        info!(ticker = %self.ticker, "AlertScheduler: sending daily alert for {}", self.ticker);
        let report = self.ctx.pipeline.run(&self.ticker).await;

        if let AlertResult::Failed(failure) = &report.result {
            warn!(
                ticker = %self.ticker,
                failure = ?failure,
                "AlertScheduler: skipped alert for {}: {}",
                self.ticker,
                report.message()
            );
            return FireOutcome::Suppressed(failure.clone());
        }

        match self.ctx.sink.send(&self.destination, &report.message()).await {
            Ok(()) => {
                info!(ticker = %self.ticker, destination = %self.destination, "AlertScheduler: delivered alert for {}", self.ticker);
                FireOutcome::Delivered
            }
            Err(e) => {
                error!(
                    ticker = %self.ticker,
                    destination = %self.destination,
                    error = %e,
                    "AlertScheduler: failed to deliver alert for {}",
                    self.ticker
                );
                FireOutcome::DeliveryFailed(e)
            }
        }
    }
}

/// Fires the alert pipeline for one ticker on a weekday cron rule,
/// evaluated on the server's local clock.
///
/// A firing that arrives while the previous one is still in flight is
/// skipped and logged; missed or failed firings are not retried.
pub struct AlertScheduler {
    job: Arc<AlertJob>,
    schedule: Schedule,
    cron_expr: String,
    handle: Arc<RwLock<Option<tokio::task::JoinHandle<()>>>>,
}

impl AlertScheduler {
    /// Create a scheduler that delivers to `destination` through the
    /// context's sink.
    pub fn new(
        ctx: Arc<AppContext>,
        config: &ScheduleConfig,
        destination: impl Into<String>,
    ) -> Result<Self, SchedulerError> {
        let cron_expr = config.cron_expression();
        let schedule =
            Schedule::from_str(&cron_expr).map_err(|e| SchedulerError::InvalidCron {
                expr: cron_expr.clone(),
                reason: e.to_string(),
            })?;

        info!(
            ticker = %config.ticker,
            cron = %cron_expr,
            "AlertScheduler: created for {} (cron: {})",
            config.ticker,
            cron_expr
        );

        Ok(Self {
            job: Arc::new(AlertJob {
                ctx,
                ticker: config.ticker.clone(),
                destination: destination.into(),
                running: AtomicBool::new(false),
            }),
            schedule,
            cron_expr,
            handle: Arc::new(RwLock::new(None)),
        })
    }

    pub fn cron_expression(&self) -> &str {
        &self.cron_expr
    }

    pub fn ticker(&self) -> &str {
        &self.job.ticker
    }

    /// First scheduled time strictly after `after`.
    pub fn next_fire_after(&self, after: DateTime<Local>) -> Option<DateTime<Local>> {
        self.schedule.after(&after).next()
    }

    pub fn state(&self) -> SchedulerState {
        if self.job.running.load(Ordering::Acquire) {
            SchedulerState::Running
        } else {
            SchedulerState::Idle
        }
    }

    /// Run one firing now, honouring the Idle/Running guard.
    pub async fn fire(&self) -> FireOutcome {
        self.job.fire().await
    }

    /// Start the timer loop. Each firing runs as its own task so a slow
    /// provider cannot delay the next tick.
    pub async fn start(&self) {
        let mut handle = self.handle.write().await;
        if handle.is_some() {
            warn!("AlertScheduler: already started");
            return;
        }

        let job = self.job.clone();
        let schedule = self.schedule.clone();

        *handle = Some(tokio::spawn(async move {
            info!("AlertScheduler: started, waiting for cron schedule...");
            let mut cursor = Local::now();

            loop {
                let Some(next_tick) = schedule.after(&cursor).next() else {
                    warn!("AlertScheduler: cron rule has no upcoming times");
                    return;
                };

                let wait = (next_tick - Local::now()).to_std().unwrap_or_default();
                info!(next = %next_tick, "AlertScheduler: next alert at {}", next_tick);
                tokio::time::sleep(wait).await;
                cursor = next_tick;

                let job = job.clone();
                tokio::spawn(async move {
                    job.fire().await;
                });
            }
        }));

        info!("AlertScheduler: started successfully");
    }

    /// Stop the timer loop. A firing already in flight runs to completion.
    pub async fn stop(&self) {
        let mut handle = self.handle.write().await;
        if let Some(h) = handle.take() {
            h.abort();
            info!("AlertScheduler: stopped");
        }
    }

    /// Check if the timer loop is active
    pub async fn is_running(&self) -> bool {
        let handle = self.handle.read().await;
        handle.is_some()
    }
}
