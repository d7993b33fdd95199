//! Consultation stage state machine.
//!
//! Defines the phases of a symptom-intake conversation and the moves the
//! dialogue engine is allowed to make between them.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// The phase of a symptom-intake conversation.
///
/// Stages move in a loop:
/// - `Intake`: waiting for the first symptom description
/// - `FollowUp`: asking follow-up questions, collecting more symptoms
/// - `Diagnosed`: a report has been given; only a reset moves on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ConsultationStage {
    /// Fresh conversation, no symptoms yet.
    #[default]
    Intake,

    /// At least one symptom collected, more being gathered.
    FollowUp,

    /// Enough symptoms collected and a diagnosis report delivered.
    Diagnosed,
}

impl ConsultationStage {
    /// Returns a short label suitable for UI display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Intake => "Intake",
            Self::FollowUp => "Follow-up",
            Self::Diagnosed => "Diagnosed",
        }
    }
}

impl fmt::Display for ConsultationStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl StateMachine for ConsultationStage {
    fn can_transition_to(&self, target: &Self) -> bool {
        use ConsultationStage::*;
        matches!(
            (self, target),
            // First description moves straight to follow-up questions
            (Intake, FollowUp) |
            // Keep asking until the threshold is reached
            (FollowUp, FollowUp) |
            (FollowUp, Diagnosed) |
            // Help text keeps the stage, an explicit reset starts over
            (Diagnosed, Diagnosed) |
            (Diagnosed, Intake)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use ConsultationStage::*;
        match self {
            Intake => vec![FollowUp],
            FollowUp => vec![FollowUp, Diagnosed],
            Diagnosed => vec![Diagnosed, Intake],
        }
    }
}
