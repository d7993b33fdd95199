//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod consultation;
pub mod prescription;

pub use consultation::{
    SendMessageCommand, SendMessageError, SendMessageHandler, SendMessageResult,
    StartConsultationCommand, StartConsultationHandler, StartConsultationResult,
};
pub use prescription::{
    CheckPrescriptionCommand, CheckPrescriptionHandler, CheckPrescriptionResult,
};
