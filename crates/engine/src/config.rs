//! Engine configuration: dimension weights, the skill vocabulary, and the
//! experience-indicator list. All of it is passed explicitly at construction;
//! the engine never reads the environment or any global state.

use serde::{Deserialize, Serialize};

use crate::errors::EngineError;
use crate::vocabulary::SkillGroup;

/// Relative weight of each scoring dimension. Must sum to 1.0; validated
/// once at engine construction, never re-checked per call.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MatchWeights {
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
    pub text_similarity: f64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            skills: 0.4,
            experience: 0.3,
            education: 0.2,
            text_similarity: 0.1,
        }
    }
}

impl MatchWeights {
    pub fn sum(&self) -> f64 {
        self.skills + self.experience + self.education + self.text_similarity
    }

    /// Rejects weight sets that do not sum to 1.0 (within float tolerance).
    pub fn validate(&self) -> Result<(), EngineError> {
        let sum = self.sum();
        if (sum - 1.0).abs() > 1e-6 {
            return Err(EngineError::InvalidWeights { sum });
        }
        Ok(())
    }
}

/// Full configuration surface of the engine. `Default` gives the stock
/// weights, vocabulary, and indicator list; hosts override fields as needed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    pub weights: MatchWeights,
    /// Skill vocabulary pattern groups, compiled at construction.
    pub skill_groups: Vec<SkillGroup>,
    /// Verbs and nouns that signal experience language in a job posting.
    pub experience_indicators: Vec<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            weights: MatchWeights::default(),
            skill_groups: crate::vocabulary::default_skill_groups(),
            experience_indicators: default_experience_indicators(),
        }
    }
}

/// Stock experience-indicator keywords, matched as lowercase substrings in
/// both the job text and the résumé text.
pub fn default_experience_indicators() -> Vec<String> {
    [
        "experience",
        "years",
        "worked",
        "developed",
        "managed",
        "led",
        "built",
        "created",
        "designed",
        "implemented",
        "maintained",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
