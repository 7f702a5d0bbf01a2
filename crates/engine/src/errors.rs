use thiserror::Error;

/// Engine-level error type.
///
/// Only construction can fail: scoring paths map missing or empty input to
/// documented neutral fallbacks and never return `Result`.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("scoring weights must sum to 1.0, got {sum}")]
    InvalidWeights { sum: f64 },

    #[error("invalid skill pattern in group '{group}': {source}")]
    InvalidSkillPattern {
        group: String,
        #[source]
        source: regex::Error,
    },
}
