//! Care Assist - symptom intake dialogue and prescription safety checks
//!
//! The domain layer holds a deterministic intake state machine and a
//! rule-based prescription validator. Randomized dialogue content sits
//! behind the `ContentProvider` port so the core stays testable.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
