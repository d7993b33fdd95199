//! Prescription safety rules.
//!
//! A flat, ordered table. Every rule is checked against every entry; a rule
//! that fires contributes one message and a status floor.

use super::entry::PrescriptionEntry;
use super::patient::PatientProfile;
use super::status::ValidationStatus;

/// Age below which aspirin is flagged.
pub const ASPIRIN_MIN_AGE: i64 = 16;

/// Medication names that count as an antibiotic for the infection rule.
pub const ANTIBIOTIC_TERMS: &[&str] = &["antibiotic", "amoxicillin", "penicillin"];

pub const MSG_NAME_REQUIRED: &str = "Medication name is required";
pub const MSG_DOSAGE_REQUIRED: &str = "Dosage is required";
pub const MSG_PENICILLIN_ALLERGY: &str = "ALLERGY ALERT: Patient is allergic to penicillin";
pub const MSG_ASPIRIN_AGE: &str = "AGE WARNING: Aspirin not recommended for patients under 16";
pub const MSG_IBUPROFEN_FREQUENCY: &str =
    "DOSAGE WARNING: High frequency for ibuprofen, monitor for GI effects";
pub const MSG_INFECTION_ANTIBIOTIC: &str = "INFO: Consider antibiotic for bacterial infection";
pub const MSG_APPROPRIATE: &str = "Prescription appears appropriate for the given diagnosis";

/// Normalized view of one entry plus the shared inputs.
///
/// Text fields are trimmed and lowercased once so rules stay one-liners.
#[derive(Debug)]
pub struct RuleContext<'a> {
    pub medication: String,
    pub dosage: String,
    pub frequency: String,
    pub diagnosis: &'a str,
    pub profile: &'a PatientProfile,
}

impl<'a> RuleContext<'a> {
    /// `diagnosis` must already be lowercased.
    pub fn new(entry: &PrescriptionEntry, profile: &'a PatientProfile, diagnosis: &'a str) -> Self {
        Self {
            medication: entry.medication_name.trim().to_lowercase(),
            dosage: entry.dosage.trim().to_lowercase(),
            frequency: entry.frequency.trim().to_lowercase(),
            diagnosis,
            profile,
        }
    }
}

/// One safety check.
#[derive(Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub message: &'static str,
    pub status: ValidationStatus,
    pub applies: fn(&RuleContext<'_>) -> bool,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

/// Rules in evaluation order.
pub static RULES: &[Rule] = &[
    Rule {
        name: "medication_required",
        message: MSG_NAME_REQUIRED,
        status: ValidationStatus::Rejected,
        applies: |ctx| ctx.medication.is_empty(),
    },
    Rule {
        name: "dosage_required",
        message: MSG_DOSAGE_REQUIRED,
        status: ValidationStatus::Rejected,
        applies: |ctx| ctx.dosage.is_empty(),
    },
    Rule {
        name: "penicillin_allergy",
        message: MSG_PENICILLIN_ALLERGY,
        status: ValidationStatus::Rejected,
        applies: |ctx| ctx.medication.contains("penicillin") && ctx.profile.has_allergy("penicillin"),
    },
    Rule {
        name: "aspirin_age",
        message: MSG_ASPIRIN_AGE,
        status: ValidationStatus::Warning,
        applies: |ctx| {
            ctx.profile.age_years.is_some_and(|age| age < ASPIRIN_MIN_AGE)
                && ctx.medication.contains("aspirin")
        },
    },
    Rule {
        name: "ibuprofen_frequency",
        message: MSG_IBUPROFEN_FREQUENCY,
        status: ValidationStatus::Warning,
        applies: |ctx| ctx.medication.contains("ibuprofen") && ctx.frequency.contains("4 times"),
    },
    Rule {
        name: "infection_without_antibiotic",
        message: MSG_INFECTION_ANTIBIOTIC,
        status: ValidationStatus::Warning,
        applies: |ctx| {
            ctx.diagnosis.contains("infection")
                && !ANTIBIOTIC_TERMS.iter().any(|term| ctx.medication.contains(term))
        },
    },
];
