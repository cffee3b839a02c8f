//! Filter engine: predicate selection over the record store.

pub mod engine;
pub mod state;

pub use engine::{apply, matches};
pub use state::{AirlineFilter, DateRange, FilterState, SentimentSet};
