//! ValidationStatus enum for prescription safety judgments.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Safety judgment for one entry or a whole report.
///
/// Variants are declared in severity order, so the derived `Ord` gives
/// `Approved < Warning < Rejected`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum ValidationStatus {
    #[default]
    Approved,
    Warning,
    Rejected,
}

impl ValidationStatus {
    /// Raises the status to at least `floor`; never lowers it.
    #[must_use]
    pub fn escalate(self, floor: ValidationStatus) -> ValidationStatus {
        self.max(floor)
    }

    /// Most severe status in the iterator, `Approved` when empty.
    pub fn most_severe<I>(statuses: I) -> ValidationStatus
    where
        I: IntoIterator<Item = ValidationStatus>,
    {
        statuses
            .into_iter()
            .max()
            .unwrap_or(ValidationStatus::Approved)
    }
}

impl fmt::Display for ValidationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ValidationStatus::Approved => "Approved",
            ValidationStatus::Warning => "Warning",
            ValidationStatus::Rejected => "Rejected",
        };
        write!(f, "{}", s)
    }
}
