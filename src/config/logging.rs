//! Logging configuration

use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use super::error::ValidationError;

/// Log output settings
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    /// Default filter directive, overridden by `RUST_LOG`
    #[serde(default = "default_filter")]
    pub filter: String,

    /// "pretty" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

impl LoggingSettings {
    /// Check if JSON output is selected
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.is_json() && !self.format.eq_ignore_ascii_case("pretty") {
            return Err(ValidationError::InvalidLogFormat(self.format.clone()));
        }
        if EnvFilter::try_new(&self.filter).is_err() {
            return Err(ValidationError::InvalidLogFilter(self.filter.clone()));
        }
        Ok(())
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            format: default_format(),
        }
    }
}

fn default_filter() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "pretty".to_string()
}
