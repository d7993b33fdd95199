//! Prescription handlers.

mod check_prescription;

pub use check_prescription::{
    CheckPrescriptionCommand, CheckPrescriptionHandler, CheckPrescriptionResult,
};
