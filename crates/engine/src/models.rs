//! Input and output records crossing the engine boundary.
//!
//! Résumés and job postings are produced by external collaborators (document
//! extraction, job ingestion) and consumed read-only. `MatchReport` is
//! ephemeral — recomputed on every call, no identity, no persistence.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A candidate's résumé after document extraction. Every field may be empty;
/// the engine substitutes neutral scores rather than failing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Resume {
    /// Declared skills, as extracted (any casing, may contain duplicates).
    #[serde(default)]
    pub skills: Vec<String>,
    /// Free-text education entries, in document order.
    #[serde(default)]
    pub education: Vec<String>,
    /// Free-text experience entries, in document order.
    #[serde(default)]
    pub experience: Vec<String>,
    /// Full extracted document text.
    #[serde(default)]
    pub text: String,
}

impl Resume {
    /// Case-folded, deduplicated skill set. Scoring always counts against
    /// this set so a duplicated skill entry can never inflate (or deflate,
    /// via the breadth bonus) the skills sub-score.
    pub fn normalized_skills(&self) -> BTreeSet<String> {
        self.skills
            .iter()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

/// A job posting after ingestion. Any field may be empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobPosting {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub requirements: String,
    #[serde(default)]
    pub company: String,
}

impl JobPosting {
    /// Concatenation of the non-empty `title`, `summary`, and `requirements`
    /// fields with single-space separators, in that fixed order. `company`
    /// is identity metadata and does not participate in scoring.
    pub fn full_text(&self) -> String {
        [&self.title, &self.summary, &self.requirements]
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Per-dimension sub-scores, each in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
    pub text_similarity: f64,
}

/// Full match explanation returned by [`MatchEngine::explain`].
///
/// [`MatchEngine::explain`]: crate::engine::MatchEngine::explain
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    /// Weighted overall score in [0, 100]. Always equals what
    /// `calculate_match_score` returns for the same inputs.
    pub overall_score: f64,
    pub breakdown: ScoreBreakdown,
    /// Résumé skills that also appear in the job posting (case-folded).
    pub matching_skills: BTreeSet<String>,
    /// Skills the job posting asks for that the résumé lacks.
    pub missing_skills: BTreeSet<String>,
    /// Threshold-driven improvement suggestions, in fixed rule order.
    pub recommendations: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_text_joins_in_fixed_order() {
        let job = JobPosting {
            title: "Backend Engineer".to_string(),
            summary: "Build services".to_string(),
            requirements: "Rust required".to_string(),
            company: "Acme".to_string(),
        };
        assert_eq!(job.full_text(), "Backend Engineer Build services Rust required");
    }

    #[test]
    fn test_full_text_skips_empty_fields() {
        let job = JobPosting {
            title: "Backend Engineer".to_string(),
            summary: String::new(),
            requirements: "  ".to_string(),
            company: String::new(),
        };
        assert_eq!(job.full_text(), "Backend Engineer");
    }

    #[test]
    fn test_full_text_excludes_company() {
        let job = JobPosting {
            company: "Acme Corp".to_string(),
            ..Default::default()
        };
        assert_eq!(job.full_text(), "");
    }

    #[test]
    fn test_normalized_skills_dedups_case_insensitively() {
        let resume = Resume {
            skills: vec![
                "Python".to_string(),
                "python".to_string(),
                " PYTHON ".to_string(),
                "SQL".to_string(),
            ],
            ..Default::default()
        };
        let skills = resume.normalized_skills();
        assert_eq!(skills.len(), 2);
        assert!(skills.contains("python"));
        assert!(skills.contains("sql"));
    }

    #[test]
    fn test_normalized_skills_drops_blank_entries() {
        let resume = Resume {
            skills: vec!["".to_string(), "  ".to_string(), "go".to_string()],
            ..Default::default()
        };
        assert_eq!(resume.normalized_skills().len(), 1);
    }

    #[test]
    fn test_resume_deserializes_with_missing_fields() {
        let resume: Resume = serde_json::from_str(r#"{"skills": ["rust"]}"#).unwrap();
        assert_eq!(resume.skills, vec!["rust"]);
        assert!(resume.text.is_empty());
        assert!(resume.education.is_empty());
    }

    #[test]
    fn test_breakdown_serializes_with_dimension_keys() {
        let breakdown = ScoreBreakdown {
            skills: 80.0,
            experience: 70.0,
            education: 60.0,
            text_similarity: 90.0,
        };
        let json = serde_json::to_value(breakdown).unwrap();
        assert_eq!(json["skills"], 80.0);
        assert_eq!(json["text_similarity"], 90.0);
    }
}
