//! Skill vocabulary — a fixed catalog of recognized technical-skill surface
//! forms, grouped by category and matched with word-boundary-anchored,
//! case-insensitive patterns.

use std::collections::BTreeSet;

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::EngineError;

/// One named pattern group in the vocabulary. The pattern is a regex
/// alternation over the group's surface forms; hosts may supply their own
/// groups at engine construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGroup {
    pub name: String,
    pub pattern: String,
}

impl SkillGroup {
    pub fn new(name: &str, pattern: &str) -> Self {
        Self {
            name: name.to_string(),
            pattern: pattern.to_string(),
        }
    }
}

/// Stock vocabulary: six groups covering languages, web frameworks,
/// databases, cloud/devops tooling, data tools, and general practice terms.
pub fn default_skill_groups() -> Vec<SkillGroup> {
    vec![
        SkillGroup::new(
            "languages",
            r"\b(?:python|java|javascript|typescript|c\+\+|c#|php|ruby|go|rust|swift|kotlin)\b",
        ),
        SkillGroup::new(
            "web_frameworks",
            r"\b(?:react|angular|vue|django|flask|spring|laravel|express|node\.js)\b",
        ),
        SkillGroup::new(
            "databases",
            r"\b(?:sql|mysql|postgresql|mongodb|redis|oracle)\b",
        ),
        SkillGroup::new(
            "cloud_devops",
            r"\b(?:aws|azure|gcp|docker|kubernetes|git|jenkins)\b",
        ),
        SkillGroup::new(
            "data_tools",
            r"\b(?:pandas|numpy|spark|hadoop|tableau|power bi|excel|jupyter)\b",
        ),
        SkillGroup::new(
            "general",
            r"\b(?:html|css|rest|api|agile|scrum|linux|windows)\b",
        ),
    ]
}

/// Compiled skill vocabulary. Construction validates every pattern; matching
/// is infallible after that.
#[derive(Debug)]
pub struct SkillVocabulary {
    groups: Vec<(String, Regex)>,
}

impl SkillVocabulary {
    /// Compiles the pattern groups, failing on the first invalid pattern.
    pub fn compile(groups: &[SkillGroup]) -> Result<Self, EngineError> {
        let mut compiled = Vec::with_capacity(groups.len());
        for group in groups {
            let regex = RegexBuilder::new(&group.pattern)
                .case_insensitive(true)
                .build()
                .map_err(|source| EngineError::InvalidSkillPattern {
                    group: group.name.clone(),
                    source,
                })?;
            compiled.push((group.name.clone(), regex));
        }
        Ok(Self { groups: compiled })
    }

    /// Finds every recognized skill token in `text`. Overlapping matches
    /// across groups collapse into one set entry. Returns an empty set when
    /// nothing matches.
    pub fn find_skills(&self, text: &str) -> BTreeSet<String> {
        let mut skills = BTreeSet::new();
        for (name, regex) in &self.groups {
            for m in regex.find_iter(text) {
                let skill = m.as_str().to_lowercase();
                debug!(group = %name, %skill, "vocabulary match");
                skills.insert(skill);
            }
        }
        skills
    }
}
