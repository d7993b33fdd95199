//! Consultation domain module.
//!
//! The symptom-intake conversation: stages, collected symptoms, transcript
//! messages and the engine that sequences the dialogue.

mod diagnosis;
mod engine;
mod message;
mod stage;
mod state;
mod symptom;
mod templates;

pub use diagnosis::DiagnosisTemplate;
pub use engine::{
    DialogueConfig, DialogueEngine, ReplyKind, TurnOutcome, MIN_DIAGNOSIS_THRESHOLD, RESET_KEYWORDS,
};
pub use message::{Attachment, ChatMessage, Role};
pub use stage::ConsultationStage;
pub use state::ConversationState;
pub use symptom::{Symptom, DEFAULT_DURATION, DEFAULT_SEVERITY};
pub use templates::{DIAGNOSED_HELP, GREETING, MEDICAL_DISCLAIMER, RESET_ACKNOWLEDGEMENT};
