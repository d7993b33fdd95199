//! PrescriptionValidator - applies the rule table to every entry.

use tracing::debug;

use super::entry::PrescriptionEntry;
use super::patient::PatientProfile;
use super::report::{ValidationItem, ValidationReport};
use super::rules::{RuleContext, MSG_APPROPRIATE, RULES};
use super::status::ValidationStatus;

/// Stateless rule evaluator.
///
/// Every call recomputes the whole report; the same inputs always produce
/// the same report.
pub struct PrescriptionValidator;

impl PrescriptionValidator {
    /// Validates `entries` for `profile` against the free-text `diagnosis`.
    pub fn validate(
        profile: &PatientProfile,
        entries: &[PrescriptionEntry],
        diagnosis: &str,
    ) -> ValidationReport {
        let diagnosis = diagnosis.trim().to_lowercase();

        let items: Vec<ValidationItem> = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| Self::validate_entry(index, entry, profile, &diagnosis))
            .collect();

        let report = ValidationReport::from_items(items);
        debug!(
            entries = entries.len(),
            overall = %report.overall_status,
            "Validated prescription"
        );
        report
    }

    fn validate_entry(
        index: usize,
        entry: &PrescriptionEntry,
        profile: &PatientProfile,
        diagnosis: &str,
    ) -> ValidationItem {
        let ctx = RuleContext::new(entry, profile, diagnosis);
        let mut status = ValidationStatus::Approved;
        let mut messages = Vec::new();

        for rule in RULES.iter().filter(|rule| (rule.applies)(&ctx)) {
            status = status.escalate(rule.status);
            messages.push(rule.message.to_string());
        }

        if messages.is_empty() {
            messages.push(MSG_APPROPRIATE.to_string());
        }

        let name = entry.medication_name.trim();
        let medication_name = if name.is_empty() {
            ValidationItem::fallback_label(index)
        } else {
            name.to_string()
        };

        ValidationItem {
            medication_name,
            status,
            messages,
        }
    }
}
