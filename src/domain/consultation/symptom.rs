//! Symptom value object.

use serde::{Deserialize, Serialize};

/// Severity recorded for every symptom until real extraction exists.
pub const DEFAULT_SEVERITY: u8 = 5;

/// Duration recorded for every symptom until real extraction exists.
pub const DEFAULT_DURATION: &str = "recent";

/// One user-described symptom, captured verbatim from a chat turn.
///
/// Severity and duration are placeholders: the text is not mined for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symptom {
    description: String,
    severity_hint: u8,
    duration_hint: String,
}

impl Symptom {
    /// Records a symptom from raw user text with placeholder hints.
    pub fn from_utterance(text: impl Into<String>) -> Self {
        Self {
            description: text.into(),
            severity_hint: DEFAULT_SEVERITY,
            duration_hint: DEFAULT_DURATION.to_string(),
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn severity_hint(&self) -> u8 {
        self.severity_hint
    }

    pub fn duration_hint(&self) -> &str {
        &self.duration_hint
    }
}
