//! Dialogue engine.
//!
//! Decides, turn by turn, whether the assistant asks another follow-up
//! question, hands out a diagnosis, or resets the conversation.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::stage::ConsultationStage;
use super::state::ConversationState;
use super::symptom::Symptom;
use super::templates::{DIAGNOSED_HELP, RESET_ACKNOWLEDGEMENT};
use crate::domain::foundation::StateMachine;
use crate::ports::ContentProvider;

/// Smallest number of symptoms collected before a diagnosis.
pub const MIN_DIAGNOSIS_THRESHOLD: usize = 3;

/// Words that always restart a diagnosed conversation.
pub const RESET_KEYWORDS: &[&str] = &["new", "start"];

/// Tuning for the intake conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogueConfig {
    /// Symptoms required before a diagnosis is given.
    pub diagnosis_threshold: usize,
    /// Words accepted as a reset on top of [`RESET_KEYWORDS`].
    pub extra_reset_keywords: Vec<String>,
}

impl Default for DialogueConfig {
    fn default() -> Self {
        Self {
            diagnosis_threshold: MIN_DIAGNOSIS_THRESHOLD,
            extra_reset_keywords: Vec::new(),
        }
    }
}

/// What kind of reply a turn produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyKind {
    FollowUpQuestion,
    Diagnosis,
    ResetAcknowledgement,
    Help,
}

/// Result of one `advance` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    pub state: ConversationState,
    pub reply: String,
    pub kind: ReplyKind,
}

/// Engine driving the symptom-intake state machine.
///
/// Stateless between calls: the caller passes the current
/// [`ConversationState`] in and keeps the one handed back.
#[derive(Clone)]
pub struct DialogueEngine {
    config: DialogueConfig,
    content: Arc<dyn ContentProvider>,
}

impl DialogueEngine {
    /// Creates an engine with the given configuration and content source.
    pub fn new(config: DialogueConfig, content: Arc<dyn ContentProvider>) -> Self {
        Self { config, content }
    }

    /// Symptoms needed for a diagnosis, never below [`MIN_DIAGNOSIS_THRESHOLD`].
    pub fn diagnosis_threshold(&self) -> usize {
        self.config.diagnosis_threshold.max(MIN_DIAGNOSIS_THRESHOLD)
    }

    /// Processes one user utterance.
    ///
    /// Total over its input: any text, including empty or nonsense text, is
    /// accepted as a symptom description while symptoms are being collected.
    pub fn advance(&self, state: &ConversationState, user_text: &str) -> TurnOutcome {
        let from = state.stage();
        let outcome = match from {
            ConsultationStage::Intake => {
                let next = state.with_symptom(
                    Symptom::from_utterance(user_text),
                    ConsultationStage::FollowUp,
                );
                self.follow_up(next)
            }
            ConsultationStage::FollowUp => {
                let collected = state.symptom_count() + 1;
                if collected >= self.diagnosis_threshold() {
                    let next = state.with_symptom(
                        Symptom::from_utterance(user_text),
                        ConsultationStage::Diagnosed,
                    );
                    self.diagnose(next)
                } else {
                    let next = state.with_symptom(
                        Symptom::from_utterance(user_text),
                        ConsultationStage::FollowUp,
                    );
                    self.follow_up(next)
                }
            }
            ConsultationStage::Diagnosed => {
                if self.is_reset_request(user_text) {
                    TurnOutcome {
                        state: ConversationState::new(),
                        reply: RESET_ACKNOWLEDGEMENT.to_string(),
                        kind: ReplyKind::ResetAcknowledgement,
                    }
                } else {
                    TurnOutcome {
                        state: state.clone(),
                        reply: DIAGNOSED_HELP.to_string(),
                        kind: ReplyKind::Help,
                    }
                }
            }
        };

        debug_assert!(from.can_transition_to(&outcome.state.stage()));
        debug!(
            from = %from,
            to = %outcome.state.stage(),
            symptoms = outcome.state.symptom_count(),
            reply = ?outcome.kind,
            "Dialogue turn advanced"
        );

        outcome
    }

    /// Returns true if the text asks to start a new consultation.
    ///
    /// Matches [`RESET_KEYWORDS`] plus any configured extras, as
    /// case-insensitive substrings.
    pub fn is_reset_request(&self, text: &str) -> bool {
        let lower = text.to_lowercase();
        RESET_KEYWORDS
            .iter()
            .map(|keyword| keyword.to_string())
            .chain(
                self.config
                    .extra_reset_keywords
                    .iter()
                    .map(|keyword| keyword.trim().to_lowercase()),
            )
            .filter(|keyword| !keyword.is_empty())
            .any(|keyword| lower.contains(&keyword))
    }

    fn follow_up(&self, state: ConversationState) -> TurnOutcome {
        TurnOutcome {
            state,
            reply: self.content.pick_follow_up_question(),
            kind: ReplyKind::FollowUpQuestion,
        }
    }

    fn diagnose(&self, state: ConversationState) -> TurnOutcome {
        let template = self.content.pick_diagnosis_template();
        debug!(condition = %template.condition, "Diagnosis template selected");
        TurnOutcome {
            state,
            reply: template.render_report(),
            kind: ReplyKind::Diagnosis,
        }
    }
}

impl std::fmt::Debug for DialogueEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DialogueEngine")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::consultation::DiagnosisTemplate;
    use crate::domain::foundation::Percentage;
    use proptest::prelude::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Numbers its questions so tests can tell calls apart.
    #[derive(Default)]
    struct CountingContent {
        questions: AtomicUsize,
        diagnoses: AtomicUsize,
    }

    impl ContentProvider for CountingContent {
        fn pick_follow_up_question(&self) -> String {
            let n = self.questions.fetch_add(1, Ordering::SeqCst) + 1;
            format!("Question {}?", n)
        }

        fn pick_diagnosis_template(&self) -> DiagnosisTemplate {
            self.diagnoses.fetch_add(1, Ordering::SeqCst);
            DiagnosisTemplate {
                condition: "Mild Gastroenteritis".to_string(),
                confidence: Percentage::new(75),
                description: "Stomach flu or food-related illness".to_string(),
                recommendations: vec!["Stay hydrated with clear fluids".to_string()],
            }
        }
    }

    fn engine() -> (DialogueEngine, Arc<CountingContent>) {
        let content = Arc::new(CountingContent::default());
        let engine = DialogueEngine::new(DialogueConfig::default(), content.clone());
        (engine, content)
    }

    fn run(engine: &DialogueEngine, turns: &[&str]) -> TurnOutcome {
        let mut state = ConversationState::new();
        let mut last = None;
        for turn in turns {
            let outcome = engine.advance(&state, turn);
            state = outcome.state.clone();
            last = Some(outcome);
        }
        last.expect("at least one turn")
    }

    mod intake {
        use super::*;

        #[test]
        fn first_turn_moves_to_follow_up_with_question() {
            let (engine, content) = engine();
            let outcome = engine.advance(&ConversationState::new(), "I have a headache");

            assert_eq!(outcome.state.stage(), ConsultationStage::FollowUp);
            assert_eq!(outcome.state.symptom_count(), 1);
            assert_eq!(outcome.state.symptoms()[0].description(), "I have a headache");
            assert_eq!(outcome.reply, "Question 1?");
            assert_eq!(outcome.kind, ReplyKind::FollowUpQuestion);
            assert_eq!(content.questions.load(Ordering::SeqCst), 1);
        }

        #[test]
        fn empty_text_is_still_recorded() {
            let (engine, _) = engine();
            let outcome = engine.advance(&ConversationState::new(), "");
            assert_eq!(outcome.state.symptom_count(), 1);
            assert_eq!(outcome.state.symptoms()[0].description(), "");
        }

        #[test]
        fn reset_words_during_intake_are_just_symptoms() {
            let (engine, _) = engine();
            let outcome = engine.advance(&ConversationState::new(), "it started yesterday");
            assert_eq!(outcome.state.stage(), ConsultationStage::FollowUp);
        }
    }

    mod follow_up {
        use super::*;

        #[test]
        fn second_turn_asks_again() {
            let (engine, _) = engine();
            let outcome = run(&engine, &["headache", "two days"]);
            assert_eq!(outcome.state.stage(), ConsultationStage::FollowUp);
            assert_eq!(outcome.state.symptom_count(), 2);
            assert_eq!(outcome.reply, "Question 2?");
        }

        #[test]
        fn third_turn_diagnoses() {
            let (engine, content) = engine();
            let outcome = run(&engine, &["headache", "two days", "no fever"]);

            assert_eq!(outcome.state.stage(), ConsultationStage::Diagnosed);
            assert_eq!(outcome.state.symptom_count(), 3);
            assert_eq!(outcome.kind, ReplyKind::Diagnosis);
            assert!(outcome.reply.contains("**Likely Condition:** Mild Gastroenteritis"));
            assert!(outcome.reply.contains("**Confidence Level:** 75%"));
            assert_eq!(content.diagnoses.load(Ordering::SeqCst), 1);
            assert_eq!(content.questions.load(Ordering::SeqCst), 2);
        }

        #[test]
        fn custom_threshold_delays_diagnosis() {
            let content = Arc::new(CountingContent::default());
            let engine = DialogueEngine::new(
                DialogueConfig {
                    diagnosis_threshold: 5,
                    ..Default::default()
                },
                content,
            );
            let outcome = run(&engine, &["a", "b", "c", "d"]);
            assert_eq!(outcome.state.stage(), ConsultationStage::FollowUp);
            let outcome = engine.advance(&outcome.state, "e");
            assert_eq!(outcome.state.stage(), ConsultationStage::Diagnosed);
        }

        #[test]
        fn threshold_below_minimum_is_raised() {
            let content = Arc::new(CountingContent::default());
            let engine = DialogueEngine::new(
                DialogueConfig {
                    diagnosis_threshold: 0,
                    ..Default::default()
                },
                content,
            );
            assert_eq!(engine.diagnosis_threshold(), 3);
            let outcome = run(&engine, &["a", "b"]);
            assert_eq!(outcome.state.stage(), ConsultationStage::FollowUp);
            assert_eq!(outcome.kind, ReplyKind::FollowUpQuestion);
            let outcome = engine.advance(&outcome.state, "c");
            assert_eq!(outcome.state.stage(), ConsultationStage::Diagnosed);
        }

        #[test]
        fn threshold_of_two_still_waits_for_third_symptom() {
            let content = Arc::new(CountingContent::default());
            let engine = DialogueEngine::new(
                DialogueConfig {
                    diagnosis_threshold: 2,
                    ..Default::default()
                },
                content.clone(),
            );
            let outcome = run(&engine, &["a", "b"]);
            assert_eq!(outcome.state.stage(), ConsultationStage::FollowUp);
            assert_eq!(content.diagnoses.load(Ordering::SeqCst), 0);
        }
    }

    mod diagnosed {
        use super::*;

        fn diagnosed(engine: &DialogueEngine) -> ConversationState {
            run(engine, &["a", "b", "c"]).state
        }

        #[test]
        fn new_consultation_resets() {
            let (engine, _) = engine();
            let outcome = engine.advance(&diagnosed(&engine), "new consultation please");

            assert_eq!(outcome.state, ConversationState::new());
            assert_eq!(outcome.reply, RESET_ACKNOWLEDGEMENT);
            assert_eq!(outcome.kind, ReplyKind::ResetAcknowledgement);
        }

        #[test]
        fn reset_is_case_insensitive() {
            let (engine, _) = engine();
            let outcome = engine.advance(&diagnosed(&engine), "START OVER");
            assert_eq!(outcome.state.stage(), ConsultationStage::Intake);
        }

        #[test]
        fn keyword_inside_a_word_still_resets() {
            let (engine, _) = engine();
            let outcome = engine.advance(&diagnosed(&engine), "renewal");
            assert_eq!(outcome.state.stage(), ConsultationStage::Intake);
        }

        #[test]
        fn anything_else_returns_help_and_keeps_state() {
            let (engine, content) = engine();
            let state = diagnosed(&engine);
            let outcome = engine.advance(&state, "thanks");

            assert_eq!(outcome.state, state);
            assert_eq!(outcome.reply, DIAGNOSED_HELP);
            assert_eq!(outcome.kind, ReplyKind::Help);
            assert_eq!(content.diagnoses.load(Ordering::SeqCst), 1);
        }

        #[test]
        fn blank_extra_keywords_never_match() {
            let content = Arc::new(CountingContent::default());
            let engine = DialogueEngine::new(
                DialogueConfig {
                    extra_reset_keywords: vec!["  ".to_string(), String::new()],
                    ..Default::default()
                },
                content,
            );
            assert!(!engine.is_reset_request("thanks"));
        }

        #[test]
        fn extra_keywords_add_to_builtin_ones() {
            let content = Arc::new(CountingContent::default());
            let engine = DialogueEngine::new(
                DialogueConfig {
                    extra_reset_keywords: vec![" Restart ".to_string()],
                    ..Default::default()
                },
                content,
            );
            let state = diagnosed(&engine);
            for text in ["RESTART please", "new", "Start over"] {
                let outcome = engine.advance(&state, text);
                assert_eq!(outcome.kind, ReplyKind::ResetAcknowledgement, "{}", text);
            }
        }

        #[test]
        fn reset_conversation_can_run_again() {
            let (engine, _) = engine();
            let reset = engine.advance(&diagnosed(&engine), "new").state;
            let next = engine.advance(&reset, "back pain");
            assert_eq!(next.state.stage(), ConsultationStage::FollowUp);
            assert_eq!(next.state.symptom_count(), 1);
        }
    }

    proptest! {
        #[test]
        fn diagnosed_iff_threshold_reached(turns in proptest::collection::vec("[a-z ]{0,12}", 1..12)) {
            let (engine, _) = engine();
            let mut state = ConversationState::new();
            for turn in &turns {
                let outcome = engine.advance(&state, turn);
                let was_diagnosed = state.stage() == ConsultationStage::Diagnosed;
                state = outcome.state;

                if was_diagnosed {
                    // Only a reset leaves Diagnosed, and it clears everything.
                    prop_assert!(
                        state.stage() == ConsultationStage::Diagnosed
                            || (state.stage() == ConsultationStage::Intake && state.symptoms().is_empty())
                    );
                } else {
                    prop_assert_eq!(
                        state.stage() == ConsultationStage::Diagnosed,
                        state.symptom_count() >= 3
                    );
                }
                if state.stage() == ConsultationStage::Intake {
                    prop_assert_eq!(state.symptom_count(), 0);
                }
                prop_assert!(
                    ConversationState::restore(state.stage(), state.symptoms().to_vec(), 3).is_ok()
                );
            }
        }
    }
}
