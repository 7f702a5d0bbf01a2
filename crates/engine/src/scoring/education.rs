//! Education sub-scorer: degree-level and field-of-study requirements
//! detected in the job text, checked against the résumé's education entries.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use tracing::debug;

/// Requirement patterns checked independently: bachelor-level, master-level,
/// doctorate-level, and named fields of study.
static EDUCATION_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\b(?:bachelor|degree|b\.s\.|b\.a\.|bs|ba)\b",
        r"\b(?:master|m\.s\.|m\.a\.|mba|ms|ma)\b",
        r"\b(?:phd|doctorate|ph\.d\.)\b",
        r"\b(?:computer science|engineering|mathematics|physics)\b",
    ]
    .iter()
    .map(|p| {
        RegexBuilder::new(p)
            .case_insensitive(true)
            .build()
            .expect("education pattern is valid")
    })
    .collect()
});

/// Scores education fit. A job with no detectable education requirement is
/// unconstrained (80). A requirement with no résumé education entries is
/// penalized (30). Otherwise the fraction of required patterns the résumé's
/// concatenated education text satisfies.
pub fn score_education(education: &[String], job_text: &str) -> f64 {
    let job_text = job_text.to_lowercase();
    let required: Vec<&Regex> = EDUCATION_PATTERNS
        .iter()
        .filter(|p| p.is_match(&job_text))
        .collect();

    if required.is_empty() {
        return 80.0;
    }
    if education.is_empty() {
        return 30.0;
    }

    let resume_edu_text = education.join(" ").to_lowercase();
    let matches = required
        .iter()
        .filter(|p| p.is_match(&resume_edu_text))
        .count();

    let score = matches as f64 / required.len() as f64 * 100.0;
    debug!(
        required = required.len(),
        matched = matches,
        score,
        "education sub-score"
    );
    score
}
