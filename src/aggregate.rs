//! Aggregation over filtered records: summary statistics and text corpora.

pub mod aggregator;
pub mod corpus;
pub mod summary;

pub use aggregator::summarize;
pub use corpus::{TermCount, TermCounter, corpus_for};
pub use summary::{DailyBucket, SentimentCounts, SentimentShares, Summary};
