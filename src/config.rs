//! Configuration management for the contact assistant.
//!
//! This module handles loading and validating configuration from environment
//! variables, optionally seeded from a `.env` file.

use crate::domain::Birthday;
use crate::error::{ConfigError, ConfigResult};
use chrono::NaiveDate;
use std::env;

/// Default prompt shown before each command.
pub const DEFAULT_PROMPT: &str = "Enter a command: ";

/// Configuration for the contact assistant.
#[derive(Debug, Clone)]
pub struct Config {
    /// Prompt printed before reading each command
    pub prompt: String,

    /// Fixed date used by the `birthdays` command instead of the local date
    pub today: Option<NaiveDate>,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ASSISTANT_PROMPT`: Prompt text (default: "Enter a command: ")
    /// - `ASSISTANT_TODAY`: Pin "today" to a `DD.MM.YYYY` date
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env is fine; a malformed one is not
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(ConfigError::DotenvError(e.to_string()));
            }
        }

        let prompt = env::var("ASSISTANT_PROMPT").unwrap_or_else(|_| DEFAULT_PROMPT.to_string());
        let today = Self::parse_env_date("ASSISTANT_TODAY")?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            prompt,
            today,
            log_level,
        })
    }

    /// Parse an optional `DD.MM.YYYY` environment variable.
    fn parse_env_date(var_name: &str) -> ConfigResult<Option<NaiveDate>> {
        match env::var(var_name) {
            Ok(val) => Birthday::new(&val)
                .map(|parsed| Some(parsed.date()))
                .map_err(|_| ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be a date in DD.MM.YYYY form, got: {}", val),
                }),
            Err(_) => Ok(None),
        }
    }

    /// The date `birthdays` should count from: the pinned date if set,
    /// otherwise the local calendar date.
    pub fn today(&self) -> NaiveDate {
        self.today
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prompt: DEFAULT_PROMPT.to_string(),
            today: None,
            log_level: "error".to_string(),
        }
    }
}
