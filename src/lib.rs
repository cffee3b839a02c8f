//! # Contrail
//!
//! Filtering, aggregation and sentiment scoring for airline social posts.
//!
//! ## Features
//!
//! - CSV dataset loading into an immutable, shareable record store
//! - Freshness-bounded process-wide store cache
//! - Pure filter engine over airline, date range and sentiment selections
//! - Summary statistics with dense daily series and per-airline breakdowns
//! - Per-sentiment text corpora and word-frequency input for word clouds
//! - Lexicon-based polarity scoring of ad-hoc text
//!
//! ## Example
//!
//! ```
//! use contrail::aggregate::summarize;
//! use contrail::dataset::DatasetLoader;
//! use contrail::filter::{AirlineFilter, FilterState, apply};
//!
//! let csv = "airline_sentiment,airline,text,tweet_created\n\
//!            positive,A,great crew,2023-01-01 10:00:00 +0000\n\
//!            negative,B,lost bag,2023-01-02 10:00:00 +0000\n";
//! let store = DatasetLoader::new().load_reader(csv.as_bytes()).unwrap();
//!
//! let filter = FilterState::for_store(&store).with_airline(AirlineFilter::only("A"));
//! let summary = summarize(apply(&store, &filter));
//! assert_eq!(summary.total_count, 1);
//! assert_eq!(summary.count_by_sentiment.positive, 1);
//! ```

pub mod aggregate;
pub mod analysis;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod dataset;
pub mod error;
pub mod filter;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
