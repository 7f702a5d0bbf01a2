//! Experience sub-scorer: overlap of experience-indicator language between
//! job and résumé, blended with a required-years comparison.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use tracing::debug;

/// Numeric patterns recognizing a years-of-experience figure. The range form
/// ("3-5 years") is tried first so its lower bound wins over the bare
/// "5 years" inside it.
static YEARS_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(\d+)\s*-\s*\d+\s*years?",
        r"(\d+)\+?\s*years?\s*(?:of\s*)?(?:experience|exp)",
        r"(\d+)\+?\s*years?\s*(?:in|with)",
        r"minimum\s*(?:of\s*)?(\d+)\s*years?",
        r"at\s*least\s*(\d+)\s*years?",
    ]
    .iter()
    .map(|p| {
        RegexBuilder::new(p)
            .case_insensitive(true)
            .build()
            .expect("years pattern is valid")
    })
    .collect()
});

/// Extracts a years-of-experience figure from text. Returns `None` when no
/// pattern matches; a matched but unparseable number also counts as absent.
pub fn extract_years(text: &str) -> Option<u32> {
    for pattern in YEARS_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(text) {
            if let Ok(years) = caps[1].parse::<u32>() {
                return Some(years);
            }
        }
    }
    None
}

/// Scores experience alignment. If the job text carries none of the
/// indicator keywords the score is a neutral-high 70; otherwise 70% of the
/// weight goes to indicator overlap and 30% to the years comparison.
pub fn score_experience(resume_text: &str, job_text: &str, indicators: &[String]) -> f64 {
    let resume_text = resume_text.to_lowercase();
    let job_text = job_text.to_lowercase();

    let found: Vec<&String> = indicators
        .iter()
        .filter(|kw| job_text.contains(kw.as_str()))
        .collect();

    if found.is_empty() {
        return 70.0;
    }

    let matches = found
        .iter()
        .filter(|kw| resume_text.contains(kw.as_str()))
        .count();
    let keyword_match_pct = matches as f64 / found.len() as f64 * 100.0;

    let years_score = match (extract_years(&resume_text), extract_years(&job_text)) {
        (Some(resume_years), Some(job_years)) => {
            if resume_years >= job_years {
                100.0
            } else if resume_years as f64 >= job_years as f64 * 0.75 {
                80.0
            } else {
                50.0
            }
        }
        // Either side silent on years: neutral.
        _ => 70.0,
    };

    let score = keyword_match_pct * 0.7 + years_score * 0.3;
    debug!(
        indicators_in_job = found.len(),
        matched = matches,
        years_score,
        score,
        "experience sub-score"
    );
    score
}
