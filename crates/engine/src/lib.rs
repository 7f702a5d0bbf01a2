//! Résumé-to-job match scoring engine.
//!
//! Scores how well a candidate's résumé matches a job posting: four weighted
//! sub-scores (skills, experience, education, text similarity) combine into
//! one bounded percentage, and [`MatchEngine::explain`] additionally reports
//! the per-dimension breakdown, matched/missing skills, and improvement
//! recommendations.
//!
//! The engine is a pure function-call API. Job ingestion, document
//! extraction, persistence, and presentation all live in the host
//! application; this crate consumes already-structured [`Resume`] and
//! [`JobPosting`] records and performs no I/O.
//!
//! ```
//! use fit_engine::{EngineConfig, JobPosting, MatchEngine, Resume};
//!
//! let engine = MatchEngine::new(EngineConfig::default()).unwrap();
//! let resume = Resume {
//!     skills: vec!["python".into(), "sql".into()],
//!     text: "Built python data pipelines for 4 years.".into(),
//!     ..Default::default()
//! };
//! let job = JobPosting {
//!     title: "Data Engineer".into(),
//!     requirements: "python, sql, airflow experience".into(),
//!     ..Default::default()
//! };
//!
//! let score = engine.calculate_match_score(&resume, &job);
//! assert!((0.0..=100.0).contains(&score));
//!
//! let report = engine.explain(&resume, &job);
//! assert_eq!(report.overall_score, score);
//! ```

pub mod config;
pub mod engine;
pub mod errors;
pub mod extract;
pub mod models;
pub mod scoring;
pub mod vocabulary;

pub use config::{EngineConfig, MatchWeights};
pub use engine::MatchEngine;
pub use errors::EngineError;
pub use extract::{
    KeywordExtractor, PartOfSpeech, StoplistExtractor, TaggedToken, Tagger, TaggerExtractor,
};
pub use models::{JobPosting, MatchReport, Resume, ScoreBreakdown};
pub use vocabulary::{default_skill_groups, SkillGroup, SkillVocabulary};
