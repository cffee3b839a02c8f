//! Applying a [`FilterState`] to a store.

use log::debug;

use crate::dataset::record::Record;
use crate::dataset::store::RecordStore;
use crate::filter::state::FilterState;

/// Select the records matching every predicate of `filter`.
///
/// The airline, date and sentiment predicates are combined with AND. The
/// result borrows from the store and keeps store order. This never fails: an
/// absent, partial or inverted date range places no restriction on dates, and
/// an empty sentiment set selects nothing.
pub fn apply<'a>(store: &'a RecordStore, filter: &FilterState) -> Vec<&'a Record> {
    if filter.sentiments.is_empty() {
        debug!("Empty sentiment selection, no records match");
        return Vec::new();
    }

    let date_bounds = filter.date_range.as_ref().and_then(|range| {
        let bounds = range.bounds();
        if bounds.is_none() {
            debug!("Ignoring incomplete date range {range:?}");
        }
        bounds
    });

    let filtered: Vec<&Record> = store
        .records()
        .iter()
        .filter(|record| filter.airline.matches(&record.airline))
        .filter(|record| match date_bounds {
            Some((start, end)) => {
                let date = record.date();
                start <= date && date <= end
            }
            None => true,
        })
        .filter(|record| filter.sentiments.contains(record.sentiment))
        .collect();

    debug!(
        "Filter {} / {:?} / {:?} kept {} of {} records",
        filter.airline,
        date_bounds,
        filter.sentiments.iter().collect::<Vec<_>>(),
        filtered.len(),
        store.len()
    );
    filtered
}

/// Whether a single record passes `filter`.
pub fn matches(record: &Record, filter: &FilterState) -> bool {
    filter.airline.matches(&record.airline)
        && filter
            .date_range
            .as_ref()
            .is_none_or(|range| range.contains(record.date()))
        && filter.sentiments.contains(record.sentiment)
}
