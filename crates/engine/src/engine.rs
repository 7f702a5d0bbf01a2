//! The match engine: wires the four sub-scorers to a weighted aggregate and
//! builds full match explanations.
//!
//! The engine is pure and stateless across calls — construction validates
//! configuration and compiles the vocabulary, after which scoring performs no
//! I/O and touches no shared mutable state. One instance can be shared across
//! threads behind an `Arc`.

use tracing::debug;

use crate::config::{EngineConfig, MatchWeights};
use crate::errors::EngineError;
use crate::extract::{KeywordExtractor, StoplistExtractor, Tagger, TaggerExtractor};
use crate::models::{JobPosting, MatchReport, Resume, ScoreBreakdown};
use crate::scoring::skills::SkillsMatch;
use crate::scoring::{education, experience, similarity, skills};
use crate::vocabulary::SkillVocabulary;

/// Résumé-to-job match scoring engine.
pub struct MatchEngine {
    weights: MatchWeights,
    vocabulary: SkillVocabulary,
    indicators: Vec<String>,
    extractor: Box<dyn KeywordExtractor>,
}

impl MatchEngine {
    /// Builds an engine with the regex-fallback keyword extractor.
    ///
    /// Fails if the weights do not sum to 1.0 or a vocabulary pattern does
    /// not compile; an engine in a bad state cannot be constructed.
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        Self::with_extractor(config, Box::new(StoplistExtractor))
    }

    /// Builds an engine backed by a host-provided linguistic tagger for
    /// keyword extraction.
    pub fn with_tagger(config: EngineConfig, tagger: Box<dyn Tagger>) -> Result<Self, EngineError> {
        Self::with_extractor(config, Box::new(TaggerExtractor::new(tagger)))
    }

    fn with_extractor(
        config: EngineConfig,
        extractor: Box<dyn KeywordExtractor>,
    ) -> Result<Self, EngineError> {
        config.weights.validate()?;
        let vocabulary = SkillVocabulary::compile(&config.skill_groups)?;
        let indicators = config
            .experience_indicators
            .iter()
            .map(|kw| kw.to_lowercase())
            .collect();
        Ok(Self {
            weights: config.weights,
            vocabulary,
            indicators,
            extractor,
        })
    }

    /// Overall match score in [0, 100]. Deterministic: identical inputs
    /// always yield the identical score.
    pub fn calculate_match_score(&self, resume: &Resume, job: &JobPosting) -> f64 {
        let (breakdown, _) = self.score_dimensions(resume, job);
        self.weighted_total(&breakdown)
    }

    /// Full explanation: per-dimension breakdown, matched and missing skill
    /// sets, and threshold-driven recommendations. The overall score here is
    /// always identical to [`Self::calculate_match_score`] on the same
    /// inputs — both derive from one shared breakdown computation.
    pub fn explain(&self, resume: &Resume, job: &JobPosting) -> MatchReport {
        let (breakdown, skills_match) = self.score_dimensions(resume, job);
        let overall_score = self.weighted_total(&breakdown);

        MatchReport {
            overall_score,
            breakdown,
            matching_skills: skills_match.matching,
            missing_skills: skills_match.missing,
            recommendations: build_recommendations(&breakdown),
        }
    }

    fn score_dimensions(&self, resume: &Resume, job: &JobPosting) -> (ScoreBreakdown, SkillsMatch) {
        let job_text = job.full_text();

        let skills_match = skills::score_skills(resume, &job_text, &self.vocabulary);
        let breakdown = ScoreBreakdown {
            skills: skills_match.score,
            experience: experience::score_experience(&resume.text, &job_text, &self.indicators),
            education: education::score_education(&resume.education, &job_text),
            text_similarity: similarity::score_similarity(
                &resume.text,
                &job_text,
                self.extractor.as_ref(),
            ),
        };

        debug!(?breakdown, "dimensions scored");
        (breakdown, skills_match)
    }

    fn weighted_total(&self, breakdown: &ScoreBreakdown) -> f64 {
        let total = self.weights.skills * breakdown.skills
            + self.weights.experience * breakdown.experience
            + self.weights.education * breakdown.education
            + self.weights.text_similarity * breakdown.text_similarity;
        total.clamp(0.0, 100.0)
    }
}

/// Recommendation rules, evaluated independently and emitted in fixed order.
fn build_recommendations(breakdown: &ScoreBreakdown) -> Vec<String> {
    let mut recommendations = Vec::new();
    if breakdown.skills < 70.0 {
        recommendations
            .push("Consider developing skills mentioned in the job requirements".to_string());
    }
    if breakdown.experience < 60.0 {
        recommendations
            .push("Highlight relevant experience that matches job requirements".to_string());
    }
    if breakdown.education < 50.0 {
        recommendations.push("Consider relevant certifications or education".to_string());
    }
    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> MatchEngine {
        MatchEngine::new(EngineConfig::default()).unwrap()
    }

    fn sample_resume() -> Resume {
        Resume {
            skills: vec!["python".to_string(), "sql".to_string(), "docker".to_string()],
            education: vec!["Bachelor of Science in Computer Science".to_string()],
            experience: vec!["Backend Engineer at Initech".to_string()],
            text: "Backend engineer with 5 years of experience. Developed and \
                   maintained python services backed by sql databases, managed \
                   docker deployments."
                .to_string(),
        }
    }

    fn sample_job() -> JobPosting {
        JobPosting {
            title: "Senior Backend Engineer".to_string(),
            summary: "We need an engineer who has developed large python systems.".to_string(),
            requirements: "3+ years of experience with python, sql, aws. \
                           Bachelor degree in computer science required."
                .to_string(),
            company: "Initrode".to_string(),
        }
    }

    #[test]
    fn test_score_is_bounded() {
        let score = engine().calculate_match_score(&sample_resume(), &sample_job());
        assert!((0.0..=100.0).contains(&score), "score was {score}");
    }

    #[test]
    fn test_score_is_deterministic() {
        let engine = engine();
        let resume = sample_resume();
        let job = sample_job();
        let first = engine.calculate_match_score(&resume, &job);
        let second = engine.calculate_match_score(&resume, &job);
        assert_eq!(first, second);
    }

    #[test]
    fn test_explain_overall_equals_calculate() {
        let engine = engine();
        let resume = sample_resume();
        let job = sample_job();
        let report = engine.explain(&resume, &job);
        assert_eq!(
            report.overall_score,
            engine.calculate_match_score(&resume, &job)
        );
    }

    #[test]
    fn test_empty_inputs_hit_every_neutral_fallback() {
        // skills 0, experience 70 (no indicators in job), education 80
        // (no requirement), similarity 50 (empty résumé text):
        // 0.4*0 + 0.3*70 + 0.2*80 + 0.1*50 = 42.
        let job = JobPosting {
            title: "Senior Engineer role".to_string(),
            ..Default::default()
        };
        let score = engine().calculate_match_score(&Resume::default(), &job);
        assert!((score - 42.0).abs() < 1e-9, "score was {score}");
    }

    #[test]
    fn test_skill_sets_are_consistent_with_inputs() {
        let engine = engine();
        let resume = sample_resume();
        let report = engine.explain(&resume, &sample_job());
        let resume_skills = resume.normalized_skills();

        assert!(report.matching_skills.iter().all(|s| resume_skills.contains(s)));
        assert!(report.missing_skills.iter().all(|s| !resume_skills.contains(s)));
        assert!(report.missing_skills.contains("aws"));
        assert!(report.matching_skills.contains("python"));
    }

    #[test]
    fn test_weighted_total_matches_hand_computation() {
        let breakdown = ScoreBreakdown {
            skills: 80.0,
            experience: 70.0,
            education: 60.0,
            text_similarity: 90.0,
        };
        // 0.4*80 + 0.3*70 + 0.2*60 + 0.1*90 = 32 + 21 + 12 + 9 = 74
        let total = engine().weighted_total(&breakdown);
        assert!((total - 74.0).abs() < 1e-9, "total was {total}");
    }

    #[test]
    fn test_custom_weights_shift_the_aggregate() {
        let config = EngineConfig {
            weights: MatchWeights {
                skills: 1.0,
                experience: 0.0,
                education: 0.0,
                text_similarity: 0.0,
            },
            ..Default::default()
        };
        let engine = MatchEngine::new(config).unwrap();
        // Résumé with no skills: skills dimension is 0, and with all weight
        // on skills the overall collapses to 0.
        let score = engine.calculate_match_score(&Resume::default(), &sample_job());
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_invalid_weights_fail_construction() {
        let config = EngineConfig {
            weights: MatchWeights {
                skills: 0.9,
                experience: 0.3,
                education: 0.2,
                text_similarity: 0.1,
            },
            ..Default::default()
        };
        assert!(matches!(
            MatchEngine::new(config),
            Err(EngineError::InvalidWeights { .. })
        ));
    }

    #[test]
    fn test_invalid_skill_pattern_fails_construction() {
        let config = EngineConfig {
            skill_groups: vec![crate::vocabulary::SkillGroup::new("bad", "(unclosed")],
            ..Default::default()
        };
        assert!(matches!(
            MatchEngine::new(config),
            Err(EngineError::InvalidSkillPattern { .. })
        ));
    }

    #[test]
    fn test_recommendations_fire_below_thresholds() {
        let recommendations = build_recommendations(&ScoreBreakdown {
            skills: 40.0,
            experience: 30.0,
            education: 20.0,
            text_similarity: 0.0,
        });
        assert_eq!(recommendations.len(), 3);
        assert!(recommendations[0].contains("skills"));
        assert!(recommendations[1].contains("experience"));
        assert!(recommendations[2].contains("certifications"));
    }

    #[test]
    fn test_no_recommendations_above_thresholds() {
        let recommendations = build_recommendations(&ScoreBreakdown {
            skills: 70.0,
            experience: 60.0,
            education: 50.0,
            text_similarity: 0.0,
        });
        assert!(recommendations.is_empty());
    }

    #[test]
    fn test_good_candidate_outranks_unrelated_candidate() {
        let engine = engine();
        let job = sample_job();
        let unrelated = Resume {
            skills: vec!["carpentry".to_string()],
            text: "Journeyman carpenter, framing and finish work.".to_string(),
            ..Default::default()
        };
        let good = engine.calculate_match_score(&sample_resume(), &job);
        let bad = engine.calculate_match_score(&unrelated, &job);
        assert!(good > bad, "good {good} should beat bad {bad}");
    }

    #[test]
    fn test_engine_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MatchEngine>();
    }
}
