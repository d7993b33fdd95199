//! Content catalog - the pool of questions and diagnosis templates.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::consultation::DiagnosisTemplate;
use crate::domain::foundation::{Percentage, ValidationError};

/// Errors raised while loading a catalog file.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Catalog has no {0}")]
    Empty(&'static str),

    #[error("Invalid diagnosis template: {0}")]
    InvalidTemplate(#[from] ValidationError),
}

/// Follow-up questions and diagnosis templates.
///
/// # Invariants
///
/// - `follow_up_questions` is non-empty
/// - `diagnoses` is non-empty and every template has a condition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentCatalog {
    follow_up_questions: Vec<String>,
    diagnoses: Vec<DiagnosisTemplate>,
}

impl ContentCatalog {
    /// Creates a catalog, checking the invariants.
    pub fn new(
        follow_up_questions: Vec<String>,
        diagnoses: Vec<DiagnosisTemplate>,
    ) -> Result<Self, CatalogError> {
        let catalog = Self {
            follow_up_questions,
            diagnoses,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The catalog shipped with the application.
    pub fn builtin() -> Self {
        let follow_up_questions = [
            "How long have you been experiencing these symptoms?",
            "On a scale of 1-10, how would you rate the severity of your symptoms?",
            "Do you have any fever or temperature changes?",
            "Have you experienced any nausea or vomiting?",
            "Are you taking any medications currently?",
            "Do you have any known allergies or medical conditions?",
            "Have you traveled recently or been exposed to anyone who was sick?",
        ]
        .iter()
        .map(|q| q.to_string())
        .collect();

        let diagnoses = vec![
            builtin_template(
                "Upper Respiratory Infection",
                85,
                "Common cold or flu-like symptoms",
                &[
                    "Rest and stay hydrated",
                    "Consider over-the-counter pain relievers",
                    "Monitor symptoms for 7-10 days",
                    "Seek medical attention if symptoms worsen",
                ],
            ),
            builtin_template(
                "Seasonal Allergies",
                70,
                "Allergic reaction to environmental factors",
                &[
                    "Avoid known allergens",
                    "Consider antihistamines",
                    "Use air purifiers indoors",
                    "Consult an allergist if symptoms persist",
                ],
            ),
            builtin_template(
                "Mild Gastroenteritis",
                75,
                "Stomach flu or food-related illness",
                &[
                    "Stay hydrated with clear fluids",
                    "Follow the BRAT diet (Bananas, Rice, Applesauce, Toast)",
                    "Rest and avoid solid foods temporarily",
                    "Seek medical care if symptoms persist over 3 days",
                ],
            ),
        ];

        Self {
            follow_up_questions,
            diagnoses,
        }
    }

    /// Parses a catalog from YAML text.
    ///
    /// ```yaml
    /// follow_up_questions:
    ///   - "Any fever?"
    /// diagnoses:
    ///   - condition: "Common Cold"
    ///     confidence: 60
    ///     description: "Viral infection"
    ///     recommendations: ["Rest"]
    /// ```
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_yaml::from_str(yaml)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Loads a catalog from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }

    pub fn follow_up_questions(&self) -> &[String] {
        &self.follow_up_questions
    }

    pub fn diagnoses(&self) -> &[DiagnosisTemplate] {
        &self.diagnoses
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.follow_up_questions.is_empty() {
            return Err(CatalogError::Empty("follow-up questions"));
        }
        if self.diagnoses.is_empty() {
            return Err(CatalogError::Empty("diagnoses"));
        }
        for template in &self.diagnoses {
            template.validate()?;
        }
        Ok(())
    }
}

impl Default for ContentCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn builtin_template(
    condition: &str,
    confidence: u8,
    description: &str,
    recommendations: &[&str],
) -> DiagnosisTemplate {
    DiagnosisTemplate {
        condition: condition.to_string(),
        confidence: Percentage::new(confidence),
        description: description.to_string(),
        recommendations: recommendations.iter().map(|r| r.to_string()).collect(),
    }
}
