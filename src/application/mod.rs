//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;

pub use handlers::{
    // Consultation handlers
    SendMessageCommand, SendMessageError, SendMessageHandler, SendMessageResult,
    StartConsultationCommand, StartConsultationHandler, StartConsultationResult,
    // Prescription handlers
    CheckPrescriptionCommand, CheckPrescriptionHandler, CheckPrescriptionResult,
};
