//! Immutable in-memory record table.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::dataset::record::Record;

/// The loaded dataset.
///
/// A store never changes after construction. Airline labels and date bounds
/// are computed once so that building the filter controls does not rescan the
/// records on every render.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Record>,
    airlines: Vec<String>,
    date_bounds: Option<(NaiveDate, NaiveDate)>,
}

impl RecordStore {
    /// A store with no records, substituted when loading fails.
    pub fn empty() -> Self {
        RecordStore::default()
    }

    /// Build a store from records in source order.
    pub fn from_records(records: Vec<Record>) -> Self {
        let airlines: BTreeSet<&str> = records.iter().map(|r| r.airline.as_str()).collect();
        let airlines = airlines.into_iter().map(str::to_string).collect();

        let date_bounds = records
            .iter()
            .map(Record::date)
            .fold(None::<(NaiveDate, NaiveDate)>, |bounds, date| {
                Some(match bounds {
                    None => (date, date),
                    Some((min, max)) => (min.min(date), max.max(date)),
                })
            });

        RecordStore {
            records,
            airlines,
            date_bounds,
        }
    }

    /// Distinct airline labels in lexicographic order.
    pub fn all_airlines(&self) -> &[String] {
        &self.airlines
    }

    /// Earliest and latest calendar day across all records.
    ///
    /// `None` when the store is empty.
    pub fn date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.date_bounds
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains_airline(&self, airline: &str) -> bool {
        self.airlines
            .binary_search_by(|candidate| candidate.as_str().cmp(airline))
            .is_ok()
    }
}
