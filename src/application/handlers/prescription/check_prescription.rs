//! CheckPrescriptionHandler - Parse and validate a prescription

use tracing::info;

use crate::domain::prescription::{
    PatientForm, PatientProfile, PrescriptionList, PrescriptionParser, PrescriptionValidator,
    ValidationReport,
};

/// Command to check a prescription
#[derive(Debug, Clone, Default)]
pub struct CheckPrescriptionCommand {
    pub diagnosis: String,
    pub patient: PatientForm,
    /// Entries as currently shown in the form (never empty).
    pub entries: PrescriptionList,
    /// Pasted prescription text; replaces `entries` when it parses.
    pub free_text: String,
}

/// Result of checking a prescription
#[derive(Debug, Clone)]
pub struct CheckPrescriptionResult {
    /// Entries that were validated (parsed from free text when supplied).
    pub entries: PrescriptionList,
    pub report: ValidationReport,
}

/// Handler for prescription checks
#[derive(Debug, Clone, Default)]
pub struct CheckPrescriptionHandler;

impl CheckPrescriptionHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, cmd: CheckPrescriptionCommand) -> CheckPrescriptionResult {
        let entries = if cmd.free_text.trim().is_empty() {
            cmd.entries
        } else {
            PrescriptionList::from_entries(PrescriptionParser::parse(
                &cmd.free_text,
                cmd.entries.entries(),
            ))
        };

        let profile = PatientProfile::from_form(&cmd.patient);
        let report = PrescriptionValidator::validate(&profile, entries.entries(), &cmd.diagnosis);

        info!(
            entries = entries.len(),
            overall = %report.overall_status,
            "Prescription checked"
        );

        CheckPrescriptionResult { entries, report }
    }
}
