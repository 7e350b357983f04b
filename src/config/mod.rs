//! Environment-driven application configuration.
//!
//! Values come from the process environment (optionally seeded from a
//! `.env` file by the binary). [`AppConfig::from_lookup`] takes any lookup
//! function so parsing can be exercised without touching the environment.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use crate::services::discord::DEFAULT_DISCORD_API_BASE;
use crate::services::yahoo::DEFAULT_YAHOO_BASE_URL;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} environment variable is not set")]
    Missing(&'static str),

    #[error("invalid value '{value}' for {var}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Deployment environment name, `sandbox` unless `APP_ENV` says otherwise.
pub fn get_environment() -> String {
    env::var("APP_ENV").unwrap_or_else(|_| "sandbox".to_string())
}

/// When and for which ticker the daily alert fires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleConfig {
    pub ticker: String,
    pub hour: u32,
    pub minute: u32,
    /// Cron day-of-week field, e.g. `Mon-Fri`.
    pub weekdays: String,
}

impl ScheduleConfig {
    /// Six-field cron rule: second minute hour day-of-month month day-of-week.
    pub fn cron_expression(&self) -> String {
        format!("0 {} {} * * {}", self.minute, self.hour, self.weekdays)
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            ticker: "AAPL".to_string(),
            hour: 6,
            minute: 30,
            weekdays: "Mon-Fri".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Discord bot token; alerts are only logged when absent.
    pub discord_token: Option<String>,
    pub channel_id: String,
    pub schedule: ScheduleConfig,
    pub fetch_timeout: Duration,
    pub yahoo_base_url: String,
    pub discord_api_base: String,
    pub company_directory_path: Option<PathBuf>,
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(var) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            var,
            value: value.clone(),
            reason: e.to_string(),
        }),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let channel_id = non_empty(lookup("CHANNEL_ID")).ok_or(ConfigError::Missing("CHANNEL_ID"))?;
        if !channel_id.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConfigError::Invalid {
                var: "CHANNEL_ID",
                value: channel_id,
                reason: "expected a numeric channel id".to_string(),
            });
        }

        let defaults = ScheduleConfig::default();
        let hour: u32 = parse_var(&lookup, "ALERT_HOUR", defaults.hour)?;
        if hour > 23 {
            return Err(ConfigError::Invalid {
                var: "ALERT_HOUR",
                value: hour.to_string(),
                reason: "hour must be between 0 and 23".to_string(),
            });
        }
        let minute: u32 = parse_var(&lookup, "ALERT_MINUTE", defaults.minute)?;
        if minute > 59 {
            return Err(ConfigError::Invalid {
                var: "ALERT_MINUTE",
                value: minute.to_string(),
                reason: "minute must be between 0 and 59".to_string(),
            });
        }

        let schedule = ScheduleConfig {
            ticker: non_empty(lookup("ALERT_TICKER"))
                .map(|t| t.to_uppercase())
                .unwrap_or(defaults.ticker),
            hour,
            minute,
            weekdays: non_empty(lookup("ALERT_WEEKDAYS")).unwrap_or(defaults.weekdays),
        };

        let timeout_secs: u64 = parse_var(&lookup, "FETCH_TIMEOUT_SECONDS", 30)?;
        if timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                var: "FETCH_TIMEOUT_SECONDS",
                value: "0".to_string(),
                reason: "timeout must be greater than zero".to_string(),
            });
        }

        Ok(Self {
            discord_token: non_empty(lookup("DISCORD_TOKEN")),
            channel_id,
            schedule,
            fetch_timeout: Duration::from_secs(timeout_secs),
            yahoo_base_url: non_empty(lookup("YAHOO_BASE_URL"))
                .unwrap_or_else(|| DEFAULT_YAHOO_BASE_URL.to_string()),
            discord_api_base: non_empty(lookup("DISCORD_API_BASE"))
                .unwrap_or_else(|| DEFAULT_DISCORD_API_BASE.to_string()),
            company_directory_path: non_empty(lookup("COMPANY_DIRECTORY_PATH")).map(PathBuf::from),
        })
    }
}
