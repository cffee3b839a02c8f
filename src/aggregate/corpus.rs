//! Text aggregation per sentiment bucket.
//!
//! [`corpus_for`] joins the text of every record with a given ground-truth
//! label. [`TermCounter`] turns such a corpus into the weighted word list a
//! word cloud is drawn from. Drawing the cloud, and the "no data" placeholder
//! for an empty corpus, is left to the presentation layer.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::analysis::stop::StopWords;
use crate::analysis::tokenizer::{RegexTokenizer, Tokenizer};
use crate::dataset::record::Record;
use crate::dataset::sentiment::Sentiment;
use crate::error::{ContrailError, Result};

/// Default number of terms kept for a word cloud.
pub const DEFAULT_MAX_WORDS: usize = 200;

/// Join the text of records labelled `sentiment` with single spaces, in
/// input order. Returns an empty string when nothing matches.
///
/// # Examples
///
/// ```
/// use chrono::DateTime;
/// use contrail::aggregate::corpus_for;
/// use contrail::dataset::{Record, Sentiment};
///
/// let at = DateTime::parse_from_rfc3339("2023-01-01T00:00:00Z").unwrap();
/// let records = vec![
///     Record::new(0, "love it", "A", Sentiment::Positive, at),
///     Record::new(1, "lost my bag", "B", Sentiment::Negative, at),
///     Record::new(2, "best crew", "A", Sentiment::Positive, at),
/// ];
/// assert_eq!(corpus_for(&records, Sentiment::Positive), "love it best crew");
/// assert_eq!(corpus_for(&records, Sentiment::Neutral), "");
/// ```
pub fn corpus_for<'a, I>(records: I, sentiment: Sentiment) -> String
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut corpus = String::new();
    for record in records.into_iter().filter(|r| r.sentiment == sentiment) {
        if !corpus.is_empty() {
            corpus.push(' ');
        }
        corpus.push_str(&record.text);
    }
    corpus
}

/// A term and how often it occurs in a corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermCount {
    pub term: String,
    pub count: usize,
}

/// Counts word frequencies for word-cloud rendering.
///
/// Words are runs of two or more word characters (apostrophes allowed after
/// the first). A trailing `'s` is dropped, case is folded for counting, stop
/// words and purely numeric words are skipped. Each term is reported in its
/// most frequent spelling.
#[derive(Debug, Clone)]
pub struct TermCounter {
    tokenizer: RegexTokenizer,
    stop_words: StopWords,
    max_words: usize,
}

impl TermCounter {
    pub fn new(stop_words: StopWords, max_words: usize) -> Result<Self> {
        if max_words == 0 {
            return Err(ContrailError::config("max_words must be at least 1"));
        }
        Ok(TermCounter {
            tokenizer: RegexTokenizer::new()?,
            stop_words,
            max_words,
        })
    }

    pub fn max_words(&self) -> usize {
        self.max_words
    }

    /// The most frequent terms, by count descending then term ascending.
    pub fn count(&self, corpus: &str) -> Vec<TermCount> {
        // folded form -> (total, spelling -> count)
        let mut counts: HashMap<String, (usize, HashMap<String, usize>)> = HashMap::new();

        for token in self.tokenizer.tokenize(corpus) {
            let word = strip_possessive(&token.text);
            if word.chars().all(|c| c.is_numeric()) || self.stop_words.contains(word) {
                continue;
            }
            let (total, spellings) = counts.entry(word.to_lowercase()).or_default();
            *total += 1;
            *spellings.entry(word.to_string()).or_default() += 1;
        }

        let mut terms: Vec<TermCount> = counts
            .into_values()
            .map(|(count, spellings)| TermCount {
                term: preferred_spelling(spellings),
                count,
            })
            .collect();
        terms.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.term.cmp(&b.term)));
        terms.truncate(self.max_words);
        terms
    }
}

fn strip_possessive(word: &str) -> &str {
    match word.strip_suffix("'s").or_else(|| word.strip_suffix("'S")) {
        Some(stem) if !stem.is_empty() => stem,
        _ => word,
    }
}

fn preferred_spelling(spellings: HashMap<String, usize>) -> String {
    spellings
        .into_iter()
        .max_by(|(a, a_count), (b, b_count)| a_count.cmp(b_count).then_with(|| b.cmp(a)))
        .map(|(spelling, _)| spelling)
        .unwrap_or_default()
}
