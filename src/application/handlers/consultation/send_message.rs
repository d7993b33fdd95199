//! SendMessage command handler.
//!
//! Records the patient's message, advances the intake dialogue and returns
//! the assistant reply after the configured delay.

use std::time::Duration;

use thiserror::Error;
use tokio::time::sleep;
use tracing::{debug, info};

use crate::domain::consultation::{
    Attachment, ChatMessage, ConversationState, DialogueEngine, ReplyKind,
};
use crate::domain::foundation::{ConsultationId, DomainError};

/// Command to send a patient message.
#[derive(Debug, Clone)]
pub struct SendMessageCommand {
    pub consultation_id: ConsultationId,
    /// State returned by the previous turn.
    pub state: ConversationState,
    pub text: String,
    pub attachment: Option<Attachment>,
}

impl SendMessageCommand {
    pub fn new(
        consultation_id: ConsultationId,
        state: ConversationState,
        text: impl Into<String>,
    ) -> Self {
        Self {
            consultation_id,
            state,
            text: text.into(),
            attachment: None,
        }
    }
}

/// Result of one dialogue turn.
#[derive(Debug, Clone)]
pub struct SendMessageResult {
    pub user_message: ChatMessage,
    pub reply: ChatMessage,
    pub reply_kind: ReplyKind,
    pub state: ConversationState,
}

/// Errors that can occur when sending a message.
#[derive(Debug, Clone, Error)]
pub enum SendMessageError {
    /// Text is blank and nothing is attached.
    #[error("Validation error: message needs text or an attachment")]
    EmptyContent,

    /// Incoming state does not fit the engine's configuration.
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
}

/// Handler for patient messages.
pub struct SendMessageHandler {
    engine: DialogueEngine,
    reply_delay: Duration,
}

impl SendMessageHandler {
    pub fn new(engine: DialogueEngine, reply_delay: Duration) -> Self {
        Self {
            engine,
            reply_delay,
        }
    }

    pub async fn handle(
        &self,
        cmd: SendMessageCommand,
    ) -> Result<SendMessageResult, SendMessageError> {
        // 1. Reject empty input
        if cmd.text.trim().is_empty() && cmd.attachment.is_none() {
            return Err(SendMessageError::EmptyContent);
        }

        // 2. Check the incoming state against this engine's threshold
        let state = ConversationState::restore(
            cmd.state.stage(),
            cmd.state.symptoms().to_vec(),
            self.engine.diagnosis_threshold(),
        )
        .map_err(|err| {
            DomainError::from(err).with_detail("consultation_id", cmd.consultation_id.to_string())
        })?;

        // 3. Record the user message, attachment passed through untouched
        let user_message = ChatMessage::user(cmd.text.clone(), cmd.attachment);

        // 4. Advance the dialogue
        let outcome = self.engine.advance(&state, &cmd.text);

        // 5. Cosmetic pause before the assistant answers
        if !self.reply_delay.is_zero() {
            debug!(delay = ?self.reply_delay, "Delaying reply");
            sleep(self.reply_delay).await;
        }

        info!(
            consultation_id = %cmd.consultation_id,
            stage = %outcome.state.stage(),
            reply = ?outcome.kind,
            "Consultation turn completed"
        );

        Ok(SendMessageResult {
            user_message,
            reply: ChatMessage::assistant(outcome.reply),
            reply_kind: outcome.kind,
            state: outcome.state,
        })
    }
}
