//! Single-pass summary over a set of records.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::aggregate::summary::{DailyBucket, SentimentCounts, Summary};
use crate::dataset::record::Record;

/// Summarize `records`, typically the output of [`apply`](crate::filter::apply).
///
/// Records are grouped by (day, sentiment) and by (airline, sentiment) in one
/// pass. The daily series is then densified so every day between the first
/// and last record date has a bucket, with zeros where nothing was posted.
pub fn summarize<'a, I>(records: I) -> Summary
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut totals = SentimentCounts::default();
    let mut by_day: BTreeMap<NaiveDate, SentimentCounts> = BTreeMap::new();
    let mut by_airline: BTreeMap<String, SentimentCounts> = BTreeMap::new();

    for record in records {
        totals.increment(record.sentiment);
        by_day.entry(record.date()).or_default().increment(record.sentiment);
        // Avoid allocating a key for airlines already seen.
        match by_airline.get_mut(&record.airline) {
            Some(counts) => counts.increment(record.sentiment),
            None => {
                let mut counts = SentimentCounts::default();
                counts.increment(record.sentiment);
                by_airline.insert(record.airline.clone(), counts);
            }
        }
    }

    Summary {
        total_count: totals.total(),
        count_by_sentiment: totals,
        share_by_sentiment: totals.shares(),
        daily_timeseries: densify(&by_day),
        airline_breakdown: by_airline,
    }
}

fn densify(by_day: &BTreeMap<NaiveDate, SentimentCounts>) -> Vec<DailyBucket> {
    let (Some((&first, _)), Some((&last, _))) = (by_day.first_key_value(), by_day.last_key_value())
    else {
        return Vec::new();
    };

    first
        .iter_days()
        .take_while(|date| *date <= last)
        .map(|date| DailyBucket {
            date,
            counts: by_day.get(&date).copied().unwrap_or_default(),
        })
        .collect()
}
