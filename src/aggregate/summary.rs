//! Result types produced by the aggregator.

use std::collections::BTreeMap;
use std::ops::AddAssign;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dataset::sentiment::Sentiment;

/// Record counts per sentiment. All three labels are always present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SentimentCounts {
    pub positive: u64,
    pub neutral: u64,
    pub negative: u64,
}

impl SentimentCounts {
    pub fn get(&self, sentiment: Sentiment) -> u64 {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Neutral => self.neutral,
            Sentiment::Negative => self.negative,
        }
    }

    pub fn increment(&mut self, sentiment: Sentiment) {
        match sentiment {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Neutral => self.neutral += 1,
            Sentiment::Negative => self.negative += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.positive + self.neutral + self.negative
    }

    /// Shares of the total; all zero when the total is zero.
    pub fn shares(&self) -> SentimentShares {
        let total = self.total();
        if total == 0 {
            return SentimentShares::default();
        }
        let total = total as f64;
        SentimentShares {
            positive: self.positive as f64 / total,
            neutral: self.neutral as f64 / total,
            negative: self.negative as f64 / total,
        }
    }

    /// `(sentiment, count)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Sentiment, u64)> + '_ {
        Sentiment::ALL.into_iter().map(|s| (s, self.get(s)))
    }
}

impl AddAssign for SentimentCounts {
    fn add_assign(&mut self, other: Self) {
        self.positive += other.positive;
        self.neutral += other.neutral;
        self.negative += other.negative;
    }
}

/// Fraction of records per sentiment, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SentimentShares {
    pub positive: f64,
    pub neutral: f64,
    pub negative: f64,
}

impl SentimentShares {
    pub fn get(&self, sentiment: Sentiment) -> f64 {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Neutral => self.neutral,
            Sentiment::Negative => self.negative,
        }
    }

    pub fn sum(&self) -> f64 {
        self.positive + self.neutral + self.negative
    }
}

/// Counts for one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyBucket {
    pub date: NaiveDate,
    pub counts: SentimentCounts,
}

/// Summary statistics of a filtered set of records.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Summary {
    pub total_count: u64,
    pub count_by_sentiment: SentimentCounts,
    pub share_by_sentiment: SentimentShares,
    /// One bucket for every day from the earliest to the latest record date.
    pub daily_timeseries: Vec<DailyBucket>,
    /// Counts per airline present in the input.
    pub airline_breakdown: BTreeMap<String, SentimentCounts>,
}

impl Summary {
    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }
}
