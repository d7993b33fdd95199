//! Content Provider Port - Source of assistant wording.
//!
//! The dialogue engine decides *when* to ask a follow-up question or give a
//! diagnosis; this port decides *what* the text says. Implementations may
//! pick at random, so callers must not assume repeatable answers.

use crate::domain::consultation::DiagnosisTemplate;

/// Port for the canned questions and diagnosis templates.
pub trait ContentProvider: Send + Sync {
    /// Returns one follow-up question.
    ///
    /// No guarantee against repeating the previous question.
    fn pick_follow_up_question(&self) -> String;

    /// Returns one diagnosis template.
    ///
    /// The choice is independent of anything the patient said.
    fn pick_diagnosis_template(&self) -> DiagnosisTemplate;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Percentage;
    use std::sync::Arc;

    struct Fixed;

    impl ContentProvider for Fixed {
        fn pick_follow_up_question(&self) -> String {
            "Any fever?".to_string()
        }

        fn pick_diagnosis_template(&self) -> DiagnosisTemplate {
            DiagnosisTemplate {
                condition: "Common Cold".to_string(),
                confidence: Percentage::new(60),
                description: "Viral".to_string(),
                recommendations: vec![],
            }
        }
    }

    #[test]
    fn provider_is_usable_as_shared_trait_object() {
        let provider: Arc<dyn ContentProvider> = Arc::new(Fixed);
        let clone = Arc::clone(&provider);
        assert_eq!(clone.pick_follow_up_question(), "Any fever?");
        assert_eq!(provider.pick_diagnosis_template().condition, "Common Cold");
    }
}
