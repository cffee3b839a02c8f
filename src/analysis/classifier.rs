//! Lexicon-based sentiment classifier for ad-hoc text.
//!
//! The polarity of a text is the mean score of the lexicon words it contains,
//! after applying intensifiers and negation, clamped to `[-1.0, 1.0]`. The
//! label follows a fixed strict-threshold rule on that polarity.
//!
//! # Examples
//!
//! ```
//! use contrail::analysis::classifier::SentimentClassifier;
//! use contrail::dataset::Sentiment;
//!
//! let classifier = SentimentClassifier::new();
//! let result = classifier.classify("The flight was great and the service was excellent!");
//! assert_eq!(result.label, Sentiment::Positive);
//! assert!(result.polarity > 0.1);
//!
//! let result = classifier.classify("");
//! assert_eq!(result.label, Sentiment::Neutral);
//! assert_eq!(result.polarity, 0.0);
//! ```

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analysis::lexicon::SentimentLexicon;
use crate::analysis::tokenizer::{Tokenizer, UnicodeWordTokenizer};
use crate::dataset::sentiment::Sentiment;
use crate::error::{ContrailError, Result};

/// Factor applied to a word's score when it is negated.
const NEGATION_FACTOR: f64 = -0.5;

/// Thresholds and negation scope of the classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Polarity strictly above this is positive.
    pub positive_threshold: f64,
    /// Polarity strictly below this is negative.
    pub negative_threshold: f64,
    /// Number of tokens after a negator that it still applies to.
    pub negation_window: usize,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        ClassifierConfig {
            positive_threshold: 0.1,
            negative_threshold: -0.1,
            negation_window: 3,
        }
    }
}

impl ClassifierConfig {
    pub fn validate(&self) -> Result<()> {
        if !(-1.0..=1.0).contains(&self.positive_threshold)
            || !(-1.0..=1.0).contains(&self.negative_threshold)
        {
            return Err(ContrailError::config(
                "classifier thresholds must lie in [-1.0, 1.0]",
            ));
        }
        if self.negative_threshold > self.positive_threshold {
            return Err(ContrailError::config(format!(
                "negative_threshold ({}) exceeds positive_threshold ({})",
                self.negative_threshold, self.positive_threshold
            )));
        }
        Ok(())
    }

    /// Map a polarity to a label.
    pub fn label_for(&self, polarity: f64) -> Sentiment {
        if polarity > self.positive_threshold {
            Sentiment::Positive
        } else if polarity < self.negative_threshold {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}

/// A lexicon word that contributed to the polarity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredTerm {
    pub term: String,
    /// Score after intensifiers and negation.
    pub score: f64,
}

/// Output of [`SentimentClassifier::classify`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub label: Sentiment,
    /// Polarity in `[-1.0, 1.0]`.
    pub polarity: f64,
    pub matched_terms: Vec<ScoredTerm>,
}

impl ClassificationResult {
    fn neutral() -> Self {
        ClassificationResult {
            label: Sentiment::Neutral,
            polarity: 0.0,
            matched_terms: Vec::new(),
        }
    }
}

/// Scores text polarity against a [`SentimentLexicon`].
#[derive(Debug, Clone)]
pub struct SentimentClassifier {
    tokenizer: UnicodeWordTokenizer,
    lexicon: SentimentLexicon,
    config: ClassifierConfig,
}

impl Default for SentimentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentClassifier {
    /// Classifier with the English lexicon and default thresholds.
    pub fn new() -> Self {
        SentimentClassifier {
            tokenizer: UnicodeWordTokenizer::new(),
            lexicon: SentimentLexicon::english(),
            config: ClassifierConfig::default(),
        }
    }

    pub fn with_lexicon(mut self, lexicon: SentimentLexicon) -> Self {
        self.lexicon = lexicon;
        self
    }

    pub fn with_config(mut self, config: ClassifierConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Score `text` and map it to a label. Never fails.
    pub fn classify(&self, text: &str) -> ClassificationResult {
        if text.trim().is_empty() {
            return ClassificationResult::neutral();
        }

        let mut matched_terms = Vec::new();
        let mut multiplier = 1.0;
        let mut negation_left = 0usize;

        for token in self.tokenizer.tokenize(text) {
            let word = token.normalized();

            if self.lexicon.is_negator(&word) {
                negation_left = self.config.negation_window;
                multiplier = 1.0;
                continue;
            }
            if let Some(factor) = self.lexicon.intensifier(&word) {
                multiplier = factor;
                continue;
            }

            if let Some(base) = self.lexicon.score(&word) {
                let mut score = base * multiplier;
                if negation_left > 0 {
                    score *= NEGATION_FACTOR;
                    negation_left = 0;
                }
                matched_terms.push(ScoredTerm {
                    term: word,
                    score: score.clamp(-1.0, 1.0),
                });
            } else {
                negation_left = negation_left.saturating_sub(1);
            }
            multiplier = 1.0;
        }

        let polarity = if matched_terms.is_empty() {
            0.0
        } else {
            let total: f64 = matched_terms.iter().map(|t| t.score).sum();
            (total / matched_terms.len() as f64).clamp(-1.0, 1.0)
        };

        ClassificationResult {
            label: self.config.label_for(polarity),
            polarity,
            matched_terms,
        }
    }

    /// Classify many texts in parallel, preserving input order.
    pub fn classify_batch<S: AsRef<str> + Sync>(&self, texts: &[S]) -> Vec<ClassificationResult> {
        texts
            .par_iter()
            .map(|text| self.classify(text.as_ref()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_empty_and_whitespace_are_neutral() {
        let classifier = SentimentClassifier::new();
        for text in ["", "   ", "\n\t"] {
            let result = classifier.classify(text);
            assert_eq!(result.label, Sentiment::Neutral);
            assert_eq!(result.polarity, 0.0);
            assert!(result.matched_terms.is_empty());
        }
    }

    #[test]
    fn test_text_without_lexicon_words_is_neutral() {
        let result = SentimentClassifier::new().classify("Boarding at gate 12 now");
        assert_eq!(result.label, Sentiment::Neutral);
        assert_eq!(result.polarity, 0.0);
    }

    #[test]
    fn test_mean_of_scored_words() {
        let result = SentimentClassifier::new()
            .classify("The flight was great and the service was excellent!");
        assert!(approx(result.polarity, 0.9));
        assert_eq!(result.label, Sentiment::Positive);
        assert_eq!(result.matched_terms.len(), 2);
    }

    #[test]
    fn test_negative_text() {
        let result = SentimentClassifier::new().classify("Worst airline ever, rude staff");
        assert_eq!(result.label, Sentiment::Negative);
        assert!(result.polarity < -0.1);
    }

    #[test]
    fn test_negation_flips_and_damps() {
        let result = SentimentClassifier::new().classify("the food was not good");
        assert!(approx(result.polarity, -0.35));
        assert_eq!(result.label, Sentiment::Negative);

        let result = SentimentClassifier::new().classify("the crew wasn't rude");
        assert!(approx(result.polarity, 0.15));
        assert_eq!(result.label, Sentiment::Positive);
    }

    #[test]
    fn test_negation_window_expires() {
        let classifier = SentimentClassifier::new().with_config(ClassifierConfig {
            negation_window: 1,
            ..ClassifierConfig::default()
        });
        let result = classifier.classify("not that the seat was good");
        assert!(approx(result.polarity, 0.7));
    }

    #[test]
    fn test_intensifier_applies_to_next_word_only() {
        let classifier = SentimentClassifier::new();
        let result = classifier.classify("very nice");
        assert!(approx(result.polarity, 0.78));

        let result = classifier.classify("very much nice");
        assert!(approx(result.polarity, 0.6));
    }

    #[test]
    fn test_polarity_is_clamped() {
        let result = SentimentClassifier::new().classify("extremely excellent");
        assert_eq!(result.polarity, 1.0);
    }

    #[test]
    fn test_threshold_is_strict() {
        let config = ClassifierConfig::default();
        assert_eq!(config.label_for(0.1), Sentiment::Neutral);
        assert_eq!(config.label_for(0.1000001), Sentiment::Positive);
        assert_eq!(config.label_for(-0.1), Sentiment::Neutral);
        assert_eq!(config.label_for(-0.1000001), Sentiment::Negative);
        assert_eq!(config.label_for(0.0), Sentiment::Neutral);
    }

    #[test]
    fn test_lexicon_word_at_exact_threshold() {
        let lexicon = SentimentLexicon::empty()
            .with_word("meh", 0.1)
            .with_word("okay", 0.1000001);
        let classifier = SentimentClassifier::new().with_lexicon(lexicon);

        assert_eq!(classifier.classify("meh").label, Sentiment::Neutral);
        assert_eq!(classifier.classify("okay").label, Sentiment::Positive);
    }

    #[test]
    fn test_deterministic() {
        let classifier = SentimentClassifier::new();
        let text = "Thanks for the quick rebooking, but my bag is lost";
        assert_eq!(classifier.classify(text), classifier.classify(text));
    }

    #[test]
    fn test_batch_preserves_order() {
        let classifier = SentimentClassifier::new();
        let texts = vec!["great".to_string(), "".to_string(), "terrible".to_string()];
        let labels: Vec<_> = classifier
            .classify_batch(&texts)
            .into_iter()
            .map(|r| r.label)
            .collect();
        assert_eq!(
            labels,
            [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative]
        );
    }

    #[test]
    fn test_config_validation() {
        assert!(ClassifierConfig::default().validate().is_ok());

        let inverted = ClassifierConfig {
            positive_threshold: -0.2,
            negative_threshold: 0.2,
            ..ClassifierConfig::default()
        };
        assert!(inverted.validate().is_err());

        let out_of_range = ClassifierConfig {
            positive_threshold: 1.5,
            ..ClassifierConfig::default()
        };
        assert!(out_of_range.validate().is_err());
    }
}
