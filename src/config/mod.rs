//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `CARE_ASSIST` prefix and nested values use double underscores as separators.
//! Every value has a default, so an empty environment yields a working setup.
//!
//! # Example
//!
//! ```no_run
//! use care_assist::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Diagnosis after {} symptoms", config.dialogue.diagnosis_threshold);
//! ```

mod content;
mod dialogue;
mod error;
mod logging;

pub use content::ContentSettings;
pub use dialogue::DialogueSettings;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingSettings;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Intake dialogue tuning (threshold, reply delay, reset words)
    #[serde(default)]
    pub dialogue: DialogueSettings,

    /// Content catalog location
    #[serde(default)]
    pub content: ContentSettings,

    /// Log filter and output format
    #[serde(default)]
    pub logging: LoggingSettings,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `CARE_ASSIST` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Splits `DIALOGUE__EXTRA_RESET_KEYWORDS` on commas
    ///
    /// # Environment Variable Format
    ///
    /// - `CARE_ASSIST__DIALOGUE__DIAGNOSIS_THRESHOLD=4` -> `dialogue.diagnosis_threshold = 4`
    /// - `CARE_ASSIST__DIALOGUE__EXTRA_RESET_KEYWORDS=restart,again` -> `["restart", "again"]`
    /// - `CARE_ASSIST__LOGGING__FORMAT=json` -> `logging.format = "json"`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::with_prefix("CARE_ASSIST")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("dialogue.extra_reset_keywords"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.dialogue.validate()?;
        self.content.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
