//! Keyword extraction — turns free text into a bag of normalized tokens.
//!
//! Two backends implement the same contract, mirroring how the engine itself
//! sits behind a trait: [`StoplistExtractor`] is the always-available regex
//! fallback, and [`TaggerExtractor`] wraps a host-provided linguistic tagger
//! for part-of-speech filtering and lemmatization. The backend is chosen once
//! at engine construction; sub-scorers only see the trait.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

/// Extracts a non-deduplicated sequence of lowercase keyword tokens.
/// Repeated tokens carry frequency weight for the similarity scorer.
/// Empty or whitespace-only input yields an empty sequence, never an error.
pub trait KeywordExtractor: Send + Sync {
    fn extract(&self, text: &str) -> Vec<String>;
}

static TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[a-zA-Z]{3,}\b").expect("token pattern is valid"));

/// Articles, conjunctions, auxiliaries, and common pronouns excluded from
/// keyword extraction. Alphabetic-run tokenization already drops anything
/// shorter than three characters.
static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "and", "for", "are", "but", "not", "you", "all", "can", "had",
        "her", "was", "one", "our", "out", "day", "get", "has", "him", "his",
        "how", "man", "new", "now", "old", "see", "two", "way", "who", "boy",
        "did", "its", "let", "put", "say", "she", "too", "use", "have", "will",
        "with", "this", "that", "they", "them", "then", "than", "from", "been",
        "were", "what", "when", "where", "which", "while", "would", "could",
        "should", "shall", "must", "may", "might", "does", "doing", "done",
        "being", "both", "each", "into", "just", "more", "most", "only",
        "other", "over", "same", "some", "such", "there", "these", "those",
        "under", "very", "your", "about", "after", "before", "between",
        "during", "also", "any",
    ]
    .into_iter()
    .collect()
});

/// Regex fallback extractor: lowercased alphabetic runs of length ≥ 3 minus
/// a static stop-word list. No linguistic knowledge, no external state.
#[derive(Debug, Clone, Copy, Default)]
pub struct StoplistExtractor;

impl KeywordExtractor for StoplistExtractor {
    fn extract(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        TOKEN_RE
            .find_iter(&lowered)
            .map(|m| m.as_str().to_string())
            .filter(|token| !STOPWORDS.contains(token.as_str()))
            .collect()
    }
}

/// Coarse part-of-speech classes the extractor cares about. Anything outside
/// the content-word classes is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartOfSpeech {
    Noun,
    ProperNoun,
    Adjective,
    Verb,
    Other,
}

/// One token as annotated by a linguistic tagger.
#[derive(Debug, Clone)]
pub struct TaggedToken {
    pub text: String,
    pub lemma: String,
    pub pos: PartOfSpeech,
    pub is_stop: bool,
    pub is_punct: bool,
}

/// Host-provided linguistic tagger. The engine never links an NLP model
/// itself; whichever backend the host runs (ONNX model, sidecar service,
/// wordlist tagger) plugs in through this trait.
pub trait Tagger: Send + Sync {
    fn tag(&self, text: &str) -> Vec<TaggedToken>;
}

/// Tagger-backed extractor: keeps noun/proper-noun/adjective/verb lemmas of
/// length ≥ 3, deferring stop-word and punctuation decisions to the tagger
/// instead of the static stoplist.
pub struct TaggerExtractor {
    tagger: Box<dyn Tagger>,
}

impl TaggerExtractor {
    pub fn new(tagger: Box<dyn Tagger>) -> Self {
        Self { tagger }
    }
}

impl KeywordExtractor for TaggerExtractor {
    fn extract(&self, text: &str) -> Vec<String> {
        self.tagger
            .tag(text)
            .into_iter()
            .filter(|t| {
                matches!(
                    t.pos,
                    PartOfSpeech::Noun
                        | PartOfSpeech::ProperNoun
                        | PartOfSpeech::Adjective
                        | PartOfSpeech::Verb
                ) && !t.is_stop
                    && !t.is_punct
                    && t.text.chars().count() > 2
            })
            .map(|t| t.lemma.to_lowercase())
            .collect()
    }
}
