//! Validation results returned to the caller.

use serde::Serialize;

use super::status::ValidationStatus;

/// Advice attached to every report regardless of outcome.
pub const RECOMMENDATIONS: [&str; 4] = [
    "Verify patient allergies before dispensing",
    "Monitor patient for adverse reactions",
    "Ensure proper patient education on medication usage",
    "Schedule appropriate follow-up appointments",
];

/// Outcome for one entry, positionally paired with the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationItem {
    /// Entry name, or `"Medication N"` when the name was blank.
    pub medication_name: String,
    pub status: ValidationStatus,
    pub messages: Vec<String>,
}

impl ValidationItem {
    /// Label used when an entry has no name. `index` is zero-based.
    pub fn fallback_label(index: usize) -> String {
        format!("Medication {}", index + 1)
    }

    /// Messages on one line, separated by `". "`.
    pub fn summary(&self) -> String {
        self.messages.join(". ")
    }
}

/// Full validation result for a prescription.
///
/// # Invariants
///
/// - `overall_status` is the most severe item status
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub overall_status: ValidationStatus,
    pub items: Vec<ValidationItem>,
    pub recommendations: Vec<String>,
}

impl ValidationReport {
    /// Builds a report, deriving the overall status from the items.
    pub fn from_items(items: Vec<ValidationItem>) -> Self {
        let overall_status = ValidationStatus::most_severe(items.iter().map(|item| item.status));
        Self {
            overall_status,
            items,
            recommendations: RECOMMENDATIONS.iter().map(|r| r.to_string()).collect(),
        }
    }

    /// Count of items with the given status.
    pub fn count(&self, status: ValidationStatus) -> usize {
        self.items.iter().filter(|item| item.status == status).count()
    }
}
