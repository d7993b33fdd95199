//! Dialogue configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::domain::consultation::{DialogueConfig, MIN_DIAGNOSIS_THRESHOLD};

/// Intake dialogue tuning
#[derive(Debug, Clone, Deserialize)]
pub struct DialogueSettings {
    /// Symptoms collected before a diagnosis is given
    #[serde(default = "default_threshold")]
    pub diagnosis_threshold: usize,

    /// Pause before the assistant replies, in milliseconds (0 disables)
    #[serde(default = "default_reply_delay_ms")]
    pub reply_delay_ms: u64,

    /// Reset words accepted in addition to "new" and "start"
    #[serde(default)]
    pub extra_reset_keywords: Vec<String>,
}

impl DialogueSettings {
    /// Get reply delay as Duration
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }

    /// Engine configuration built from these settings
    pub fn dialogue_config(&self) -> DialogueConfig {
        DialogueConfig {
            diagnosis_threshold: self.diagnosis_threshold,
            extra_reset_keywords: self.extra_reset_keywords.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.diagnosis_threshold < MIN_DIAGNOSIS_THRESHOLD {
            return Err(ValidationError::InvalidThreshold {
                min: MIN_DIAGNOSIS_THRESHOLD,
                actual: self.diagnosis_threshold,
            });
        }
        if self.extra_reset_keywords.iter().any(|k| k.trim().is_empty()) {
            return Err(ValidationError::BlankResetKeyword);
        }
        Ok(())
    }
}

impl Default for DialogueSettings {
    fn default() -> Self {
        Self {
            diagnosis_threshold: default_threshold(),
            reply_delay_ms: default_reply_delay_ms(),
            extra_reset_keywords: Vec::new(),
        }
    }
}

fn default_threshold() -> usize {
    MIN_DIAGNOSIS_THRESHOLD
}

fn default_reply_delay_ms() -> u64 {
    1000
}
