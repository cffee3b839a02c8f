//! A single stored observation.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::dataset::sentiment::Sentiment;

/// One post from the dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Row position in the source, stable for the lifetime of the store.
    pub id: usize,
    /// Free text of the post. May be empty.
    pub text: String,
    /// Airline the post is about.
    pub airline: String,
    /// Ground-truth sentiment label from the dataset.
    pub sentiment: Sentiment,
    /// Creation timestamp, kept in the offset it was recorded with.
    pub created_at: DateTime<FixedOffset>,
}

impl Record {
    pub fn new<T, A>(
        id: usize,
        text: T,
        airline: A,
        sentiment: Sentiment,
        created_at: DateTime<FixedOffset>,
    ) -> Self
    where
        T: Into<String>,
        A: Into<String>,
    {
        Record {
            id,
            text: text.into(),
            airline: airline.into(),
            sentiment,
            created_at,
        }
    }

    /// Calendar day of the post in its own offset.
    pub fn date(&self) -> NaiveDate {
        self.created_at.date_naive()
    }
}
