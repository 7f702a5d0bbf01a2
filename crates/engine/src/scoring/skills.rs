//! Skills sub-scorer: coverage of the job's extractable skills by the
//! résumé's declared skills, plus a capped breadth bonus.

use std::collections::BTreeSet;

use tracing::debug;

use crate::models::Resume;
use crate::vocabulary::SkillVocabulary;

/// Skills sub-score together with the matched/missing sets the explanation
/// builder reports.
#[derive(Debug, Clone)]
pub struct SkillsMatch {
    pub score: f64,
    pub matching: BTreeSet<String>,
    pub missing: BTreeSet<String>,
}

/// Scores skill coverage. Fallbacks: a résumé with no skills scores 0 for
/// any job (nothing to match with); a job with no extractable skills scores
/// 50 (no requirement to compare against).
pub fn score_skills(resume: &Resume, job_text: &str, vocabulary: &SkillVocabulary) -> SkillsMatch {
    let resume_skills = resume.normalized_skills();
    let job_skills = vocabulary.find_skills(job_text);

    let matching: BTreeSet<String> = resume_skills.intersection(&job_skills).cloned().collect();
    let missing: BTreeSet<String> = job_skills.difference(&resume_skills).cloned().collect();

    let score = if resume_skills.is_empty() {
        0.0
    } else if job_skills.is_empty() {
        50.0
    } else {
        let coverage = matching.len() as f64 / job_skills.len() as f64 * 100.0;
        // Breadth bonus for skills beyond the exact overlap, capped at 20.
        // Résumé skills are deduplicated first, so matches never exceed the
        // résumé skill count and the bonus is never negative.
        let bonus = (2.0 * (resume_skills.len() - matching.len()) as f64).min(20.0);
        (coverage + bonus).min(100.0)
    };

    debug!(
        resume_skills = resume_skills.len(),
        job_skills = job_skills.len(),
        matched = matching.len(),
        score,
        "skills sub-score"
    );

    SkillsMatch {
        score,
        matching,
        missing,
    }
}
