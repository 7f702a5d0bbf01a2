//! Text-similarity sub-scorer: term-frequency cosine over extracted keyword
//! bags from the full résumé and job texts.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::extract::KeywordExtractor;

/// Scores overall text similarity. Either text empty → neutral 50;
/// otherwise cosine similarity of the two keyword frequency vectors × 100.
pub fn score_similarity(
    resume_text: &str,
    job_text: &str,
    extractor: &dyn KeywordExtractor,
) -> f64 {
    if resume_text.trim().is_empty() || job_text.trim().is_empty() {
        return 50.0;
    }

    let resume_keywords = extractor.extract(resume_text);
    let job_keywords = extractor.extract(job_text);

    let score = cosine_similarity(&resume_keywords, &job_keywords) * 100.0;
    debug!(
        resume_terms = resume_keywords.len(),
        job_terms = job_keywords.len(),
        score,
        "text-similarity sub-score"
    );
    score
}

/// Standard term-frequency cosine: dot product over the union vocabulary
/// divided by the product of vector magnitudes. 0.0 when either vector has
/// zero magnitude (including when either bag is empty).
pub fn cosine_similarity(keywords_a: &[String], keywords_b: &[String]) -> f64 {
    if keywords_a.is_empty() || keywords_b.is_empty() {
        return 0.0;
    }

    let counts_a = term_frequencies(keywords_a);
    let counts_b = term_frequencies(keywords_b);

    let vocabulary: HashSet<&str> = counts_a.keys().chain(counts_b.keys()).copied().collect();

    let mut dot = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;
    for term in vocabulary {
        let a = counts_a.get(term).copied().unwrap_or(0) as f64;
        let b = counts_b.get(term).copied().unwrap_or(0) as f64;
        dot += a * b;
        norm_a += a * a;
        norm_b += b * b;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a.sqrt() * norm_b.sqrt())
}

fn term_frequencies(keywords: &[String]) -> HashMap<&str, u32> {
    let mut counts = HashMap::new();
    for term in keywords {
        *counts.entry(term.as_str()).or_insert(0) += 1;
    }
    counts
}
