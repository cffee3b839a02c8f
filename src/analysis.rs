//! Text analysis: tokenization, stop words and the sentiment classifier.

pub mod classifier;
pub mod lexicon;
pub mod stop;
pub mod token;
pub mod tokenizer;

pub use classifier::{ClassificationResult, ClassifierConfig, ScoredTerm, SentimentClassifier};
pub use lexicon::SentimentLexicon;
pub use stop::StopWords;
