use std::str::FromStr;

use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use orecal_calendar::{Locale, lookup_time_zone};
use serde::Deserialize;
use std::env;

use crate::ViewMode;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub calendar: CalendarConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CalendarConfig {
    /// IANA zone that decides which civil date is "today"
    #[serde(default = "default_time_zone")]
    pub time_zone: String,
    #[serde(default = "default_locale")]
    pub locale: String,
    #[serde(default)]
    pub default_view: ViewMode,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            time_zone: default_time_zone(),
            locale: default_locale(),
            default_view: ViewMode::default(),
        }
    }
}

impl CalendarConfig {
    pub fn locale(&self) -> Result<Locale, String> {
        Locale::from_str(&self.locale).map_err(|_| format!("Unsupported locale: {}", self.locale))
    }
}

fn default_time_zone() -> String {
    "Australia/Sydney".to_string()
}

fn default_locale() -> String {
    "en-AU".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (ORECAL__CALENDAR__TIME_ZONE, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("calendar.time_zone", default_time_zone())?
            .set_default("calendar.locale", default_locale())?
            .set_default("calendar.default_view", "month")?
            .set_default("observability.log_level", default_log_level())?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional, ignored if missing
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("ORECAL")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if lookup_time_zone(&self.calendar.time_zone).is_err() {
            return Err(format!("Unknown time zone: {}", self.calendar.time_zone));
        }
        self.calendar.locale()?;
        if self.observability.log_level.trim().is_empty() {
            return Err("Log level must not be empty".to_string());
        }
        Ok(())
    }
}
