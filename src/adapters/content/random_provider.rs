//! Random content provider - uniform picks from a catalog.

use rand::seq::SliceRandom;

use super::catalog::ContentCatalog;
use crate::domain::consultation::DiagnosisTemplate;
use crate::ports::ContentProvider;

/// Picks questions and templates uniformly at random.
///
/// Consecutive picks may repeat.
#[derive(Debug, Clone, Default)]
pub struct RandomContentProvider {
    catalog: ContentCatalog,
}

impl RandomContentProvider {
    pub fn new(catalog: ContentCatalog) -> Self {
        Self { catalog }
    }
}

impl ContentProvider for RandomContentProvider {
    fn pick_follow_up_question(&self) -> String {
        let mut rng = rand::thread_rng();
        // Catalog invariants guarantee a non-empty list.
        self.catalog
            .follow_up_questions()
            .choose(&mut rng)
            .cloned()
            .unwrap_or_default()
    }

    fn pick_diagnosis_template(&self) -> DiagnosisTemplate {
        let mut rng = rand::thread_rng();
        match self.catalog.diagnoses().choose(&mut rng) {
            Some(template) => template.clone(),
            None => ContentCatalog::builtin().diagnoses()[0].clone(),
        }
    }
}
