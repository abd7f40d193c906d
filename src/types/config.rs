use crate::error::EsgError;
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EsgConfig {
    pub screening: Option<ScreeningConfig>,
    pub validation: Option<ValidationConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScreeningConfig {
    /// Per-question weightage overrides, keyed by screening question id.
    #[serde(default)]
    pub weights: HashMap<String, f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ValidationConfig {
    /// When true, recording a label outside the resolved option set is an
    /// error instead of falling through to the catch-all score.
    #[serde(default)]
    pub strict_labels: bool,
}

impl EsgConfig {
    pub fn strict_labels(&self) -> bool {
        self.validation
            .as_ref()
            .map(|validation| validation.strict_labels)
            .unwrap_or(false)
    }

    pub fn screening_weight_override(&self, question_id: &str) -> Option<f64> {
        self.screening
            .as_ref()
            .and_then(|screening| screening.weights.get(question_id))
            .copied()
    }

    pub fn validate(&self) -> Result<(), EsgError> {
        if let Some(screening) = &self.screening {
            for (question_id, weight) in &screening.weights {
                if crate::screening::find(question_id).is_none() {
                    return Err(EsgError::ConfigParse(format!(
                        "screening.weights contains unknown question id: {question_id}"
                    )));
                }
                if *weight < 0.0 {
                    return Err(EsgError::ConfigParse(format!(
                        "screening.weights.{question_id} must not be negative (found {weight})"
                    )));
                }
            }
        }
        Ok(())
    }
}
