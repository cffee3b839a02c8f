//! Polarity lexicon for rule-based scoring.
//!
//! A lexicon holds three kinds of entries:
//! - scored words with a polarity in `[-1.0, 1.0]`
//! - intensifiers that multiply the score of the word right after them
//! - negators that flip and damp the next scored word

use std::collections::{HashMap, HashSet};

/// Scored words of the default lexicon.
const DEFAULT_WORDS: &[(&str, f64)] = &[
    // positive
    ("amazing", 0.6),
    ("appreciate", 0.5),
    ("awesome", 1.0),
    ("beautiful", 0.85),
    ("best", 1.0),
    ("better", 0.5),
    ("comfortable", 0.4),
    ("cool", 0.35),
    ("courteous", 0.6),
    ("easy", 0.43),
    ("excellent", 1.0),
    ("fantastic", 0.4),
    ("fast", 0.2),
    ("favorite", 0.5),
    ("fine", 0.42),
    ("friendly", 0.38),
    ("fun", 0.3),
    ("glad", 0.5),
    ("good", 0.7),
    ("grateful", 0.6),
    ("great", 0.8),
    ("happy", 0.8),
    ("helpful", 0.5),
    ("impressed", 0.6),
    ("incredible", 0.9),
    ("kind", 0.6),
    ("love", 0.5),
    ("loved", 0.7),
    ("lovely", 0.5),
    ("nice", 0.6),
    ("perfect", 1.0),
    ("pleasant", 0.73),
    ("professional", 0.1),
    ("quick", 0.33),
    ("smooth", 0.4),
    ("super", 0.33),
    ("thank", 0.2),
    ("thankful", 0.5),
    ("thanks", 0.2),
    ("wonderful", 1.0),
    ("worth", 0.3),
    // negative
    ("angry", -0.5),
    ("annoyed", -0.4),
    ("annoying", -0.8),
    ("awful", -1.0),
    ("bad", -0.7),
    ("broken", -0.4),
    ("cancelled", -0.4),
    ("canceled", -0.4),
    ("delay", -0.35),
    ("delayed", -0.4),
    ("dirty", -0.6),
    ("disappointed", -0.75),
    ("disappointing", -0.6),
    ("disgusting", -1.0),
    ("frustrated", -0.7),
    ("frustrating", -0.4),
    ("hate", -0.8),
    ("horrible", -1.0),
    ("late", -0.3),
    ("lost", -0.4),
    ("mad", -0.63),
    ("miserable", -1.0),
    ("missed", -0.3),
    ("poor", -0.4),
    ("ridiculous", -0.33),
    ("rude", -0.3),
    ("sad", -0.5),
    ("slow", -0.3),
    ("stranded", -0.5),
    ("stuck", -0.3),
    ("terrible", -1.0),
    ("ugh", -0.4),
    ("unacceptable", -0.8),
    ("unhelpful", -0.5),
    ("upset", -0.5),
    ("useless", -0.5),
    ("worse", -0.4),
    ("worst", -1.0),
    ("wrong", -0.5),
];

const DEFAULT_INTENSIFIERS: &[(&str, f64)] = &[
    ("absolutely", 1.6),
    ("completely", 1.5),
    ("extremely", 1.8),
    ("highly", 1.4),
    ("incredibly", 1.7),
    ("quite", 1.2),
    ("really", 1.4),
    ("so", 1.3),
    ("totally", 1.4),
    ("very", 1.3),
    ("barely", 0.6),
    ("slightly", 0.7),
    ("somewhat", 0.8),
];

const DEFAULT_NEGATORS: &[&str] = &[
    "not", "no", "never", "neither", "nor", "nothing", "nobody", "none", "cannot", "dont", "cant",
    "wont", "isnt", "wasnt", "arent", "werent", "didnt", "doesnt", "hasnt", "havent", "hadnt",
    "couldnt", "shouldnt", "wouldnt",
];

/// Word polarities, intensifiers and negators.
#[derive(Debug, Clone, Default)]
pub struct SentimentLexicon {
    words: HashMap<String, f64>,
    intensifiers: HashMap<String, f64>,
    negators: HashSet<String>,
}

impl SentimentLexicon {
    /// A lexicon with no entries. Every text scores `0.0` against it.
    pub fn empty() -> Self {
        SentimentLexicon::default()
    }

    /// The built-in English lexicon tuned for short travel posts.
    pub fn english() -> Self {
        SentimentLexicon {
            words: DEFAULT_WORDS
                .iter()
                .map(|&(word, score)| (word.to_string(), score))
                .collect(),
            intensifiers: DEFAULT_INTENSIFIERS
                .iter()
                .map(|&(word, factor)| (word.to_string(), factor))
                .collect(),
            negators: DEFAULT_NEGATORS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Add or replace a scored word. The score is clamped to `[-1.0, 1.0]`.
    pub fn with_word(mut self, word: &str, score: f64) -> Self {
        self.words.insert(word.to_lowercase(), score.clamp(-1.0, 1.0));
        self
    }

    pub fn with_intensifier(mut self, word: &str, factor: f64) -> Self {
        self.intensifiers.insert(word.to_lowercase(), factor);
        self
    }

    pub fn with_negator(mut self, word: &str) -> Self {
        self.negators.insert(word.to_lowercase());
        self
    }

    /// Polarity of a lowercase word, if it is scored.
    pub fn score(&self, word: &str) -> Option<f64> {
        self.words.get(word).copied()
    }

    /// Multiplier of a lowercase intensifier.
    pub fn intensifier(&self, word: &str) -> Option<f64> {
        self.intensifiers.get(word).copied()
    }

    /// Whether a lowercase word negates what follows.
    ///
    /// Any contraction ending in `n't` counts as a negator.
    pub fn is_negator(&self, word: &str) -> bool {
        self.negators.contains(word) || word.ends_with("n't") || word.ends_with("n\u{2019}t")
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
