//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, percentages, timestamps, errors)
//! - `consultation` - Symptom intake dialogue and its state machine
//! - `prescription` - Free-text prescription parsing and rule-based validation

pub mod consultation;
pub mod foundation;
pub mod prescription;
