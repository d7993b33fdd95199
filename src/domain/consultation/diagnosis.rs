//! Canned diagnosis templates and the report rendered from them.

use serde::{Deserialize, Serialize};

use super::templates::{DIAGNOSIS_CLOSING, DIAGNOSIS_HEADER};
use crate::domain::foundation::{Percentage, ValidationError};

/// A canned condition the assistant can "diagnose".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosisTemplate {
    pub condition: String,
    pub confidence: Percentage,
    pub description: String,
    pub recommendations: Vec<String>,
}

impl DiagnosisTemplate {
    /// Creates a template, rejecting a blank condition name.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if `condition` is blank
    pub fn new(
        condition: impl Into<String>,
        confidence: Percentage,
        description: impl Into<String>,
        recommendations: Vec<String>,
    ) -> Result<Self, ValidationError> {
        let template = Self {
            condition: condition.into(),
            confidence,
            description: description.into(),
            recommendations,
        };
        template.validate()?;
        Ok(template)
    }

    /// Checks fields that deserialization cannot enforce.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.condition.trim().is_empty() {
            return Err(ValidationError::empty_field("condition"));
        }
        Ok(())
    }

    /// Renders the chat reply for this template.
    pub fn render_report(&self) -> String {
        let mut report = String::from(DIAGNOSIS_HEADER);
        report.push_str(&format!("**Likely Condition:** {}\n", self.condition));
        report.push_str(&format!("**Confidence Level:** {}\n\n", self.confidence));
        report.push_str(&format!("**Description:** {}\n\n", self.description));
        report.push_str("**Recommendations:**\n");
        for recommendation in &self.recommendations {
            report.push_str(&format!("• {}\n", recommendation));
        }
        report.push_str(DIAGNOSIS_CLOSING);
        report
    }
}
