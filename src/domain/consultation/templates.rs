//! Fixed assistant texts for the intake conversation.

/// First assistant message of every consultation.
pub const GREETING: &str = "Hello! I'm your AI medical assistant. I'll help you understand your symptoms better. Please describe your main symptoms, and I'll ask follow-up questions to narrow down possible conditions.";

/// Reply when a diagnosed conversation is reset.
pub const RESET_ACKNOWLEDGEMENT: &str =
    "Let's start a new consultation. Please describe your main symptoms.";

/// Reply to anything other than a reset once a diagnosis has been given.
pub const DIAGNOSED_HELP: &str = "I can help you with symptom analysis. Type 'new consultation' to start over, or switch to the Prescription Checker tab if you need prescription validation.";

/// Standing notice shown under the chat.
pub const MEDICAL_DISCLAIMER: &str = "Medical Disclaimer: This AI assistant provides informational support only and should not replace professional medical advice, diagnosis, or treatment. Always consult qualified healthcare providers for medical concerns.";

pub(super) const DIAGNOSIS_HEADER: &str = "Based on your symptoms, here's my assessment:\n\n";

pub(super) const DIAGNOSIS_CLOSING: &str = "\n⚠️ **Important:** This is an AI assessment only. Please consult with a healthcare professional for proper diagnosis and treatment.\n\nWould you like to start a new consultation or check a prescription?";
