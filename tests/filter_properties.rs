//! Properties of the filter engine and aggregator over every combination of
//! selections on a small fixed store.

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, TimeZone};

use contrail::aggregate::summarize;
use contrail::dataset::{Record, RecordStore, Sentiment};
use contrail::filter::{AirlineFilter, DateRange, FilterState, SentimentSet, apply, matches};

const AIRLINES: [&str; 3] = ["Delta", "United", "Virgin America"];

fn timestamp(day_offset: i64, hour: u32) -> DateTime<FixedOffset> {
    let offset = FixedOffset::west_opt(8 * 3600).unwrap();
    offset
        .with_ymd_and_hms(2015, 2, 16, hour, 0, 0)
        .unwrap()
        + Duration::days(day_offset)
}

fn store() -> RecordStore {
    let records = (0..40)
        .map(|i| {
            let sentiment = Sentiment::ALL[(i * 7 % 5) % 3];
            let airline = AIRLINES[i % AIRLINES.len()];
            let day = ((i * 3) % 10) as i64;
            Record::new(
                i,
                format!("post {i} about {airline}"),
                airline,
                sentiment,
                timestamp(day, (i % 24) as u32),
            )
        })
        .collect();
    RecordStore::from_records(records)
}

fn day(offset: i64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2015, 2, 16).unwrap() + Duration::days(offset)
}

fn airline_filters() -> Vec<AirlineFilter> {
    let mut filters = vec![AirlineFilter::All, AirlineFilter::only("Nonexistent")];
    filters.extend(AIRLINES.iter().map(|airline| AirlineFilter::only(*airline)));
    filters
}

fn date_ranges() -> Vec<Option<DateRange>> {
    vec![
        None,
        Some(DateRange::new(day(0), day(9))),
        Some(DateRange::new(day(2), day(5))),
        Some(DateRange::new(day(3), day(3))),
        Some(DateRange::new(day(7), day(1))),
        Some(DateRange::partial(Some(day(4)), None)),
        Some(DateRange::partial(None, None)),
        Some(DateRange::new(day(20), day(30))),
    ]
}

fn sentiment_sets() -> Vec<SentimentSet> {
    (0..8u8)
        .map(|mask| {
            Sentiment::ALL
                .iter()
                .enumerate()
                .filter(|(bit, _)| mask & (1 << *bit) != 0)
                .map(|(_, sentiment)| *sentiment)
                .collect()
        })
        .collect()
}

fn all_filters() -> Vec<FilterState> {
    let mut filters = Vec::new();
    for airline in airline_filters() {
        for range in date_ranges() {
            for sentiments in sentiment_sets() {
                filters.push(
                    FilterState::new()
                        .with_airline(airline.clone())
                        .with_date_range(range)
                        .with_sentiments(sentiments),
                );
            }
        }
    }
    filters
}

#[test]
fn test_result_is_ordered_subsequence() {
    let store = store();
    for filter in all_filters() {
        let result = apply(&store, &filter);
        let ids: Vec<usize> = result.iter().map(|record| record.id).collect();
        assert!(ids.windows(2).all(|pair| pair[0] < pair[1]), "{filter:?}");
        for record in &result {
            assert!(std::ptr::eq(*record, &store.records()[record.id]));
        }
    }
}

#[test]
fn test_result_is_exactly_the_matching_records() {
    let store = store();
    for filter in all_filters() {
        let result = apply(&store, &filter);
        let expected: Vec<&Record> = if filter.sentiments.is_empty() {
            Vec::new()
        } else {
            store
                .records()
                .iter()
                .filter(|record| matches(record, &filter))
                .collect()
        };
        assert_eq!(result, expected, "{filter:?}");
    }
}

#[test]
fn test_apply_is_idempotent() {
    let store = store();
    for filter in all_filters() {
        assert_eq!(apply(&store, &filter), apply(&store, &filter));
    }
}

#[test]
fn test_sentiment_membership() {
    let store = store();
    for filter in all_filters() {
        let result = apply(&store, &filter);
        if filter.sentiments.is_empty() {
            assert!(result.is_empty());
        }
        for record in result {
            assert!(filter.sentiments.contains(record.sentiment));
        }
    }
}

#[test]
fn test_unrestricted_ranges_keep_every_date() {
    let store = store();
    let everything = SentimentSet::all();
    for range in [
        None,
        Some(DateRange::new(day(7), day(1))),
        Some(DateRange::partial(Some(day(4)), None)),
        Some(DateRange::partial(None, None)),
    ] {
        let filter = FilterState::new()
            .with_date_range(range)
            .with_sentiments(everything);
        assert_eq!(apply(&store, &filter).len(), store.len(), "{range:?}");
    }
}

#[test]
fn test_range_bounds_are_inclusive() {
    let store = store();
    let filter = FilterState::new().with_date_range(Some(DateRange::new(day(3), day(3))));
    let result = apply(&store, &filter);
    assert!(!result.is_empty());
    assert!(result.iter().all(|record| record.date() == day(3)));
}

#[test]
fn test_aggregates_are_consistent() {
    let store = store();
    for filter in all_filters() {
        let summary = summarize(apply(&store, &filter));

        assert_eq!(summary.count_by_sentiment.total(), summary.total_count);
        let breakdown_total: u64 = summary
            .airline_breakdown
            .values()
            .map(|counts| counts.total())
            .sum();
        assert_eq!(breakdown_total, summary.total_count);

        let shares = summary.share_by_sentiment;
        if summary.total_count > 0 {
            assert!((shares.sum() - 1.0).abs() < 1e-9, "{filter:?}");
        } else {
            assert_eq!(shares.positive, 0.0);
            assert_eq!(shares.neutral, 0.0);
            assert_eq!(shares.negative, 0.0);
        }
    }
}

#[test]
fn test_daily_series_is_dense() {
    let store = store();
    for filter in all_filters() {
        let filtered = apply(&store, &filter);
        let summary = summarize(filtered.iter().copied());
        let series = &summary.daily_timeseries;

        let (Some(first), Some(last)) = (
            filtered.iter().map(|record| record.date()).min(),
            filtered.iter().map(|record| record.date()).max(),
        ) else {
            assert!(series.is_empty());
            continue;
        };

        let expected_days = (last - first).num_days() + 1;
        assert_eq!(series.len() as i64, expected_days, "{filter:?}");
        assert_eq!(series.first().map(|bucket| bucket.date), Some(first));
        assert_eq!(series.last().map(|bucket| bucket.date), Some(last));
        assert!(
            series
                .windows(2)
                .all(|pair| pair[1].date == pair[0].date + Duration::days(1))
        );

        let series_total: u64 = series.iter().map(|bucket| bucket.counts.total()).sum();
        assert_eq!(series_total, summary.total_count);
    }
}
