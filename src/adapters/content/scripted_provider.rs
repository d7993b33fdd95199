//! Scripted content provider for testing.
//!
//! Hands out queued questions and templates in order, falling back to
//! fixed defaults once a queue runs dry, and counts every call.
//!
//! # Example
//!
//! ```ignore
//! let provider = ScriptedContentProvider::new()
//!     .with_question("Any fever?")
//!     .with_diagnosis(template);
//!
//! assert_eq!(provider.pick_follow_up_question(), "Any fever?");
//! assert_eq!(provider.question_calls(), 1);
//! ```

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::domain::consultation::DiagnosisTemplate;
use crate::domain::foundation::Percentage;
use crate::ports::ContentProvider;

/// Question returned when the queue is empty.
pub const DEFAULT_SCRIPTED_QUESTION: &str = "Can you tell me more?";

/// Deterministic content provider.
#[derive(Debug, Clone, Default)]
pub struct ScriptedContentProvider {
    questions: Arc<Mutex<VecDeque<String>>>,
    diagnoses: Arc<Mutex<VecDeque<DiagnosisTemplate>>>,
    question_calls: Arc<Mutex<usize>>,
    diagnosis_calls: Arc<Mutex<usize>>,
}

impl ScriptedContentProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a follow-up question.
    pub fn with_question(self, question: impl Into<String>) -> Self {
        self.questions.lock().unwrap().push_back(question.into());
        self
    }

    /// Queues a diagnosis template.
    pub fn with_diagnosis(self, template: DiagnosisTemplate) -> Self {
        self.diagnoses.lock().unwrap().push_back(template);
        self
    }

    /// Number of follow-up questions handed out.
    pub fn question_calls(&self) -> usize {
        *self.question_calls.lock().unwrap()
    }

    /// Number of diagnosis templates handed out.
    pub fn diagnosis_calls(&self) -> usize {
        *self.diagnosis_calls.lock().unwrap()
    }

    /// Template returned when the queue is empty.
    pub fn default_diagnosis() -> DiagnosisTemplate {
        DiagnosisTemplate {
            condition: "Scripted Condition".to_string(),
            confidence: Percentage::new(50),
            description: "Scripted description".to_string(),
            recommendations: vec!["Scripted advice".to_string()],
        }
    }
}

impl ContentProvider for ScriptedContentProvider {
    fn pick_follow_up_question(&self) -> String {
        *self.question_calls.lock().unwrap() += 1;
        self.questions
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| DEFAULT_SCRIPTED_QUESTION.to_string())
    }

    fn pick_diagnosis_template(&self) -> DiagnosisTemplate {
        *self.diagnosis_calls.lock().unwrap() += 1;
        self.diagnoses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(Self::default_diagnosis)
    }
}
