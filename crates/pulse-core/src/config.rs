//! Configuration management for the content-pulse dashboard

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Dashboard rendering configuration
    #[serde(default)]
    pub dashboard: DashboardConfig,

    /// Live visitor counter configuration
    #[serde(default)]
    pub live: LiveConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Dashboard rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Maximum number of rows shown per table (0 shows all)
    #[serde(default = "default_row_limit")]
    pub row_limit: usize,

    /// Width of percentage bars in characters
    #[serde(default = "default_bar_width")]
    pub bar_width: usize,
}

/// Live visitor counter configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiveConfig {
    /// Seconds between counter updates
    #[serde(default = "default_interval_seconds")]
    pub interval_seconds: u64,

    /// Visitor count shown before the first update
    #[serde(default = "default_initial_visitors")]
    pub initial_visitors: u64,

    /// Largest change applied in a single update, in either direction
    #[serde(default = "default_max_step")]
    pub max_step: u32,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (json or text)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
const fn default_row_limit() -> usize {
    10
}

const fn default_bar_width() -> usize {
    20
}

const fn default_interval_seconds() -> u64 {
    5
}

const fn default_initial_visitors() -> u64 {
    1_247
}

const fn default_max_step() -> u32 {
    5
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            row_limit: default_row_limit(),
            bar_width: default_bar_width(),
        }
    }
}

impl Default for LiveConfig {
    fn default() -> Self {
        Self {
            interval_seconds: default_interval_seconds(),
            initial_visitors: default_initial_visitors(),
            max_step: default_max_step(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LiveConfig {
    /// Get the update interval as Duration
    #[must_use]
    pub const fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_seconds)
    }
}

/// `PULSE_*` variables, `__` between section and key
fn environment() -> config::Environment {
    config::Environment::with_prefix("PULSE")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

impl Config {
    /// Load configuration from an optional `pulse` file and the environment
    ///
    /// Environment variables use the `PULSE_` prefix and `__` between
    /// sections, e.g. `PULSE_LIVE__INTERVAL_SECONDS=2`.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded, parsed or validated.
    pub fn load() -> crate::Result<Self> {
        Self::build(
            config::Config::builder()
                .add_source(config::File::with_name("pulse").required(false)),
            environment(),
        )
    }

    /// Load configuration from a specific file, still honoring the environment
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or invalid.
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        Self::build(
            config::Config::builder().add_source(config::File::from(path)),
            environment(),
        )
    }

    fn build(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
        environment: config::Environment,
    ) -> crate::Result<Self> {
        let config: Self = builder
            .add_source(environment)
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Check value ranges the type system cannot express
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Validation`] for a zero update interval or an
    /// unknown log format.
    pub fn validate(&self) -> crate::Result<()> {
        if self.live.interval_seconds == 0 {
            return Err(crate::Error::validation(
                "live.interval_seconds",
                "must be at least 1",
            ));
        }

        if !matches!(self.logging.format.as_str(), "json" | "text") {
            return Err(crate::Error::validation(
                "logging.format",
                format!("expected 'json' or 'text', got '{}'", self.logging.format),
            ));
        }

        Ok(())
    }
}
