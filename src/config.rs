//! Configuration management for the contact book.
//!
//! This module handles loading and validating configuration from environment variables,
//! optionally seeded from a `.env` file in the working directory.

use crate::error::{ConfigError, ConfigResult};
use crate::services::DEFAULT_UPCOMING_DAYS;
use std::env;
use std::path::PathBuf;

/// Default data file, relative to the working directory.
pub const DEFAULT_CONTACTS_FILE: &str = "addressbook.json";

/// Largest accepted birthday window, in days.
pub const MAX_BIRTHDAY_WINDOW_DAYS: u32 = 365;

/// Configuration for the contact book.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the persisted address book (default: addressbook.json)
    pub contacts_file: PathBuf,

    /// Default window for upcoming birthdays in days (default: 7)
    pub birthday_window_days: u32,

    /// Maximum number of search results to return (default: 10)
    pub search_max_results: usize,

    /// Fuzzy match confidence threshold (0-100, default: 30)
    pub search_min_confidence: u8,

    /// Log level used when RUST_LOG is unset (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACTS_FILE`: Path of the address book file (default: addressbook.json)
    /// - `BIRTHDAY_WINDOW_DAYS`: Upcoming birthday window, 0-365 (default: 7)
    /// - `SEARCH_MAX_RESULTS`: Max search results (default: 10)
    /// - `SEARCH_MIN_CONFIDENCE`: Min fuzzy confidence score, 0-100 (default: 30)
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env is fine; anything else (bad syntax, unreadable) is not
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(ConfigError::DotenvError(e.to_string()));
            }
        }

        let defaults = Self::default();

        let contacts_file = match env::var("CONTACTS_FILE") {
            Ok(val) if val.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "CONTACTS_FILE".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(val) => PathBuf::from(val),
            Err(_) => defaults.contacts_file,
        };

        let birthday_window_days =
            Self::parse_env_u32("BIRTHDAY_WINDOW_DAYS", defaults.birthday_window_days)?;
        if birthday_window_days > MAX_BIRTHDAY_WINDOW_DAYS {
            return Err(ConfigError::InvalidValue {
                var: "BIRTHDAY_WINDOW_DAYS".to_string(),
                reason: format!("Must be at most {}", MAX_BIRTHDAY_WINDOW_DAYS),
            });
        }

        let search_max_results =
            Self::parse_env_usize("SEARCH_MAX_RESULTS", defaults.search_max_results)?;

        let search_min_confidence =
            Self::parse_env_u8("SEARCH_MIN_CONFIDENCE", defaults.search_min_confidence)?;
        if search_min_confidence > 100 {
            return Err(ConfigError::InvalidValue {
                var: "SEARCH_MIN_CONFIDENCE".to_string(),
                reason: "Must be between 0 and 100".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            contacts_file,
            birthday_window_days,
            search_max_results,
            search_min_confidence,
            log_level,
        })
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as u8 with a default value.
    fn parse_env_u8(var_name: &str, default: u8) -> ConfigResult<u8> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<u8>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a number between 0-255, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            contacts_file: PathBuf::from(DEFAULT_CONTACTS_FILE),
            birthday_window_days: DEFAULT_UPCOMING_DAYS,
            search_max_results: 10,
            search_min_confidence: 30,
            log_level: "warn".to_string(),
        }
    }
}
