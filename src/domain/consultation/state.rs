//! Conversation state for one intake session.

use serde::Serialize;

use super::stage::ConsultationStage;
use super::symptom::Symptom;
use crate::domain::foundation::ValidationError;

/// Stage plus the symptoms collected so far.
///
/// # Invariants
///
/// - `Intake` holds no symptoms
/// - `FollowUp` holds at least one symptom and fewer than the diagnosis threshold
/// - `Diagnosed` holds at least the diagnosis threshold
///
/// Only [`DialogueEngine::advance`](super::DialogueEngine::advance) produces
/// new states; callers hold them between turns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct ConversationState {
    stage: ConsultationStage,
    symptoms: Vec<Symptom>,
}

impl ConversationState {
    /// A fresh conversation: `{Intake, []}`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a state held by a presentation layer, checking the invariants.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` if the symptom count does not fit the stage
    pub fn restore(
        stage: ConsultationStage,
        symptoms: Vec<Symptom>,
        diagnosis_threshold: usize,
    ) -> Result<Self, ValidationError> {
        let count = symptoms.len();
        let (min, max) = match stage {
            ConsultationStage::Intake => (0, 0),
            ConsultationStage::FollowUp => (1, diagnosis_threshold.saturating_sub(1)),
            ConsultationStage::Diagnosed => (diagnosis_threshold, usize::MAX),
        };
        if count < min || count > max {
            return Err(ValidationError::out_of_range(
                "symptoms",
                clamp_i32(min),
                clamp_i32(max),
                clamp_i32(count),
            ));
        }
        Ok(Self { stage, symptoms })
    }

    pub fn stage(&self) -> ConsultationStage {
        self.stage
    }

    pub fn symptoms(&self) -> &[Symptom] {
        &self.symptoms
    }

    pub fn symptom_count(&self) -> usize {
        self.symptoms.len()
    }

    /// Appends a symptom and moves to `stage`.
    pub(super) fn with_symptom(&self, symptom: Symptom, stage: ConsultationStage) -> Self {
        let mut symptoms = self.symptoms.clone();
        symptoms.push(symptom);
        Self { stage, symptoms }
    }
}

fn clamp_i32(value: usize) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}
