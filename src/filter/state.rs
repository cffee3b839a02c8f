//! The user-selected predicate combination.
//!
//! A [`FilterState`] is a plain value: every interaction produces a new state
//! which is then passed to [`apply`](crate::filter::apply). Nothing reads
//! filter selections from shared mutable state.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dataset::sentiment::Sentiment;
use crate::dataset::store::RecordStore;
use crate::error::{ContrailError, Result};

/// Airline selection: the wildcard or exactly one label.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AirlineFilter {
    #[default]
    All,
    Only(String),
}

impl AirlineFilter {
    pub fn only<S: Into<String>>(airline: S) -> Self {
        AirlineFilter::Only(airline.into())
    }

    /// Case-sensitive exact match, or always true for the wildcard.
    pub fn matches(&self, airline: &str) -> bool {
        match self {
            AirlineFilter::All => true,
            AirlineFilter::Only(selected) => selected == airline,
        }
    }
}

impl fmt::Display for AirlineFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AirlineFilter::All => f.write_str("All"),
            AirlineFilter::Only(airline) => f.write_str(airline),
        }
    }
}

/// An inclusive calendar-day range whose ends may be missing.
///
/// Only a complete range with `start <= end` restricts anything; see
/// [`DateRange::bounds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// A complete range.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        DateRange {
            start: Some(start),
            end: Some(end),
        }
    }

    pub fn partial(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        DateRange { start, end }
    }

    /// Both ends, if present and ordered.
    pub fn bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.start, self.end) {
            (Some(start), Some(end)) if start <= end => Some((start, end)),
            _ => None,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.bounds().is_some()
    }

    /// Inclusive containment; an incomplete range contains every date.
    pub fn contains(&self, date: NaiveDate) -> bool {
        match self.bounds() {
            Some((start, end)) => start <= date && date <= end,
            None => true,
        }
    }
}

/// A subset of the three sentiment labels.
///
/// The empty set is legal and selects nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Sentiment>", into = "Vec<Sentiment>")]
pub struct SentimentSet {
    members: [bool; 3],
}

impl SentimentSet {
    pub fn all() -> Self {
        SentimentSet {
            members: [true; 3],
        }
    }

    pub fn empty() -> Self {
        SentimentSet {
            members: [false; 3],
        }
    }

    pub fn with(mut self, sentiment: Sentiment) -> Self {
        self.insert(sentiment);
        self
    }

    pub fn insert(&mut self, sentiment: Sentiment) {
        self.members[sentiment.index()] = true;
    }

    pub fn remove(&mut self, sentiment: Sentiment) {
        self.members[sentiment.index()] = false;
    }

    pub fn contains(&self, sentiment: Sentiment) -> bool {
        self.members[sentiment.index()]
    }

    pub fn is_empty(&self) -> bool {
        !self.members.iter().any(|&m| m)
    }

    pub fn len(&self) -> usize {
        self.members.iter().filter(|&&m| m).count()
    }

    /// Members in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = Sentiment> + '_ {
        Sentiment::ALL.into_iter().filter(|s| self.contains(*s))
    }
}

impl Default for SentimentSet {
    fn default() -> Self {
        SentimentSet::all()
    }
}

impl FromIterator<Sentiment> for SentimentSet {
    fn from_iter<I: IntoIterator<Item = Sentiment>>(iter: I) -> Self {
        iter.into_iter().fold(SentimentSet::empty(), SentimentSet::with)
    }
}

impl From<Vec<Sentiment>> for SentimentSet {
    fn from(sentiments: Vec<Sentiment>) -> Self {
        sentiments.into_iter().collect()
    }
}

impl From<SentimentSet> for Vec<Sentiment> {
    fn from(set: SentimentSet) -> Self {
        set.iter().collect()
    }
}

/// Airline, date range and sentiment selections combined with AND.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterState {
    pub airline: AirlineFilter,
    pub date_range: Option<DateRange>,
    pub sentiments: SentimentSet,
}

impl FilterState {
    /// All airlines, no date restriction, every sentiment.
    pub fn new() -> Self {
        FilterState::default()
    }

    /// The initial selection for a store: the default state with the date
    /// range preset to the store's full span.
    pub fn for_store(store: &RecordStore) -> Self {
        FilterState {
            date_range: store
                .date_bounds()
                .map(|(start, end)| DateRange::new(start, end)),
            ..FilterState::default()
        }
    }

    pub fn with_airline(mut self, airline: AirlineFilter) -> Self {
        self.airline = airline;
        self
    }

    pub fn with_date_range(mut self, date_range: Option<DateRange>) -> Self {
        self.date_range = date_range;
        self
    }

    pub fn with_sentiments(mut self, sentiments: SentimentSet) -> Self {
        self.sentiments = sentiments;
        self
    }

    /// Strict check of the selection against a store.
    ///
    /// [`apply`](crate::filter::apply) accepts any state; this reports the
    /// selections it would silently relax or that cannot match: a partial or
    /// inverted date range, and an airline the store does not contain.
    pub fn validate(&self, store: &RecordStore) -> Result<()> {
        if let Some(range) = &self.date_range {
            match (range.start, range.end) {
                (Some(start), Some(end)) if start > end => {
                    return Err(ContrailError::filter(format!(
                        "date range starts after it ends ({start} > {end})"
                    )));
                }
                (Some(_), Some(_)) => {}
                _ => return Err(ContrailError::filter("date range is incomplete")),
            }
        }
        if let AirlineFilter::Only(airline) = &self.airline {
            if !store.contains_airline(airline) {
                return Err(ContrailError::filter(format!(
                    "unknown airline '{airline}'"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::record::Record;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 1, d).unwrap()
    }

    #[test]
    fn test_airline_filter_is_exact() {
        assert!(AirlineFilter::All.matches("Delta"));
        assert!(AirlineFilter::only("Delta").matches("Delta"));
        assert!(!AirlineFilter::only("Delta").matches("delta"));
        assert!(!AirlineFilter::only("Delta").matches("Delta "));
    }

    #[test]
    fn test_date_range_contains_inclusive() {
        let range = DateRange::new(day(2), day(4));
        assert!(!range.contains(day(1)));
        assert!(range.contains(day(2)));
        assert!(range.contains(day(4)));
        assert!(!range.contains(day(5)));
    }

    #[test]
    fn test_incomplete_or_inverted_range_is_unrestricted() {
        for range in [
            DateRange::partial(Some(day(3)), None),
            DateRange::partial(None, Some(day(3))),
            DateRange::partial(None, None),
            DateRange::new(day(5), day(1)),
        ] {
            assert!(!range.is_complete());
            assert!(range.contains(day(1)));
            assert!(range.contains(day(31)));
        }
    }

    #[test]
    fn test_sentiment_set_operations() {
        let mut set = SentimentSet::empty();
        assert!(set.is_empty());

        set.insert(Sentiment::Negative);
        set.insert(Sentiment::Positive);
        assert_eq!(set.len(), 2);
        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            [Sentiment::Positive, Sentiment::Negative]
        );

        set.remove(Sentiment::Positive);
        assert!(!set.contains(Sentiment::Positive));
        assert_eq!(SentimentSet::default(), SentimentSet::all());
    }

    #[test]
    fn test_sentiment_set_serializes_as_list() {
        let set = SentimentSet::empty().with(Sentiment::Neutral);
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["neutral"]"#);

        let back: SentimentSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }

    #[test]
    fn test_for_store_presets_date_bounds() {
        let at = |s: &str| chrono::DateTime::parse_from_rfc3339(s).unwrap();
        let store = RecordStore::from_records(vec![
            Record::new(0, "", "A", Sentiment::Positive, at("2023-01-01T08:00:00Z")),
            Record::new(1, "", "B", Sentiment::Negative, at("2023-01-03T08:00:00Z")),
        ]);

        let state = FilterState::for_store(&store);
        assert_eq!(state.date_range, Some(DateRange::new(day(1), day(3))));
        assert_eq!(state.airline, AirlineFilter::All);
        assert_eq!(state.sentiments, SentimentSet::all());

        assert_eq!(FilterState::for_store(&RecordStore::empty()).date_range, None);
    }

    #[test]
    fn test_validate_reports_relaxed_selections() {
        let at = |s: &str| chrono::DateTime::parse_from_rfc3339(s).unwrap();
        let store = RecordStore::from_records(vec![Record::new(
            0,
            "",
            "A",
            Sentiment::Positive,
            at("2023-01-01T08:00:00Z"),
        )]);

        assert!(FilterState::new().validate(&store).is_ok());
        assert!(FilterState::for_store(&store).validate(&store).is_ok());

        let inverted = FilterState::new().with_date_range(Some(DateRange::new(day(3), day(1))));
        assert!(matches!(inverted.validate(&store), Err(ContrailError::Filter(_))));

        let partial =
            FilterState::new().with_date_range(Some(DateRange::partial(Some(day(1)), None)));
        assert!(partial.validate(&store).is_err());

        let unknown = FilterState::new().with_airline(AirlineFilter::only("Z"));
        assert!(unknown.validate(&store).is_err());
    }
}
