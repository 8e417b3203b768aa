//! Application configuration management.
//!
//! Tax rates and thresholds are deliberately absent: they are fixed business
//! constants owned by the engine, not deployment settings.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Batch recalculation configuration.
    #[serde(default)]
    pub batch: BatchConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Default tracing filter directive, used when `RUST_LOG` is unset.
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

fn default_filter() -> String {
    "hitung=info".to_string()
}

/// Batch recalculation configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct BatchConfig {
    /// Recompute records on the rayon thread pool.
    #[serde(default = "default_true")]
    pub parallel: bool,
    /// Pretty-print the JSON report.
    #[serde(default = "default_true")]
    pub pretty: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            pretty: true,
        }
    }
}

const fn default_true() -> bool {
    true
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, later ones overriding earlier ones:
    /// `config/default`, `config/{RUN_MODE}`, then `HITUNG__SECTION__KEY`
    /// environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("HITUNG").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
