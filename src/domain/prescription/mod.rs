//! Prescription module - free-text parsing and rule-based safety checks.
//!
//! # Module Structure
//!
//! - `entry` - PrescriptionEntry and the editable PrescriptionList
//! - `patient` - PatientForm and the parsed PatientProfile
//! - `parser` - free text to entries, with fallback
//! - `rules` - ordered safety rule table
//! - `status` - ValidationStatus severity ordering
//! - `report` - ValidationItem and ValidationReport
//! - `validator` - applies the rules to every entry

mod entry;
mod parser;
mod patient;
mod report;
pub mod rules;
mod status;
mod validator;

pub use entry::{EntryField, PrescriptionEntry, PrescriptionList};
pub use parser::PrescriptionParser;
pub use patient::{parse_leading_decimal, parse_leading_integer, PatientForm, PatientProfile};
pub use report::{ValidationItem, ValidationReport, RECOMMENDATIONS};
pub use rules::{Rule, RULES};
pub use status::ValidationStatus;
pub use validator::PrescriptionValidator;
