//! StartConsultationHandler - Open a new symptom-intake conversation

use tracing::info;

use crate::domain::consultation::{ChatMessage, ConversationState, GREETING};
use crate::domain::foundation::ConsultationId;

/// Command to start a consultation
#[derive(Debug, Clone, Default)]
pub struct StartConsultationCommand;

/// Result of starting a consultation
#[derive(Debug, Clone)]
pub struct StartConsultationResult {
    pub consultation_id: ConsultationId,
    pub state: ConversationState,
    /// Assistant greeting that opens the transcript.
    pub greeting: ChatMessage,
}

/// Handler for starting consultations
#[derive(Debug, Clone, Default)]
pub struct StartConsultationHandler;

impl StartConsultationHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, _cmd: StartConsultationCommand) -> StartConsultationResult {
        let consultation_id = ConsultationId::new();
        info!(consultation_id = %consultation_id, "Consultation started");

        StartConsultationResult {
            consultation_id,
            state: ConversationState::new(),
            greeting: ChatMessage::assistant(GREETING),
        }
    }
}
