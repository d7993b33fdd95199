//! Consultation handlers - start a consultation and exchange messages.

mod send_message;
mod start_consultation;

pub use send_message::{
    SendMessageCommand, SendMessageError, SendMessageHandler, SendMessageResult,
};
pub use start_consultation::{
    StartConsultationCommand, StartConsultationHandler, StartConsultationResult,
};
