//! A dashboard session over one dataset.
//!
//! The session owns a shared read-only store, the classifier and the term
//! counter. Every view is derived from the store and an explicit
//! [`FilterState`]; the session itself never changes after it is opened.

use std::sync::Arc;

use chrono::{DateTime, Local};
use log::{debug, error};
use serde::{Deserialize, Serialize};

use crate::aggregate::aggregator::summarize;
use crate::aggregate::corpus::{TermCount, TermCounter, corpus_for};
use crate::aggregate::summary::Summary;
use crate::analysis::classifier::{ClassificationResult, SentimentClassifier};
use crate::config::DashboardConfig;
use crate::dashboard::palette::{SentimentColors, SentimentPalette};
use crate::dataset::cache::StoreCache;
use crate::dataset::sentiment::Sentiment;
use crate::dataset::store::RecordStore;
use crate::error::{ContrailError, Result};
use crate::filter::engine::apply;
use crate::filter::state::{AirlineFilter, FilterState};

/// Label of the wildcard airline option.
pub const ALL_AIRLINES: &str = "All";

/// Everything the overview page shows for one filter selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardView {
    /// The filter the view was computed with.
    pub filter: FilterState,
    pub summary: Summary,
    /// Load failure message to show above the (empty) view.
    pub banner: Option<String>,
    pub generated_at: DateTime<Local>,
}

/// Word-cloud input for one sentiment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordCloudData {
    pub sentiment: Sentiment,
    pub corpus: String,
    pub terms: Vec<TermCount>,
    pub colors: SentimentColors,
}

impl WordCloudData {
    /// True when there is nothing to draw and a placeholder should be shown.
    pub fn is_empty(&self) -> bool {
        self.corpus.trim().is_empty()
    }
}

/// A read-only dashboard session.
#[derive(Debug, Clone)]
pub struct Dashboard {
    store: Arc<RecordStore>,
    load_error: Option<String>,
    classifier: SentimentClassifier,
    term_counter: TermCounter,
    palette: SentimentPalette,
}

impl Dashboard {
    /// Open the configured dataset through the process-wide cache.
    ///
    /// A load failure does not fail the session: it is logged, the session
    /// gets an empty store and [`banner`](Self::banner) reports the message.
    /// Only an invalid configuration is an error.
    pub fn open(config: &DashboardConfig) -> Result<Self> {
        let cache = StoreCache::global();
        if cache.ttl() != config.cache.ttl() {
            debug!("Setting shared cache freshness window to {}s", config.cache.ttl_secs);
            cache.set_ttl(config.cache.ttl());
        }
        Self::open_with_cache(config, cache)
    }

    /// Open the configured dataset through a specific cache.
    pub fn open_with_cache(config: &DashboardConfig, cache: &StoreCache) -> Result<Self> {
        config.validate()?;
        let loader = config.dataset.loader()?;
        let (store, load_error) = match cache.get_or_load(&config.dataset.path, &loader) {
            Ok(store) => (store, None),
            Err(e) if e.is_load_failure() => {
                let banner = load_banner(&e);
                error!("{banner}");
                (Arc::new(RecordStore::empty()), Some(banner))
            }
            Err(e) => return Err(e),
        };

        Ok(Dashboard {
            store,
            load_error,
            classifier: SentimentClassifier::new().with_config(config.classifier.clone()),
            term_counter: config.word_cloud.term_counter()?,
            palette: config.palette.clone(),
        })
    }

    /// A session over an already loaded store with default settings.
    pub fn with_store(store: Arc<RecordStore>) -> Result<Self> {
        let config = DashboardConfig::default();
        Ok(Dashboard {
            store,
            load_error: None,
            classifier: SentimentClassifier::new().with_config(config.classifier),
            term_counter: config.word_cloud.term_counter()?,
            palette: config.palette,
        })
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// The load failure message, if the dataset could not be loaded.
    pub fn banner(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// Airline choices for the selector: the wildcard first, then every
    /// airline in the store.
    pub fn airline_options(&self) -> Vec<String> {
        std::iter::once(ALL_AIRLINES.to_string())
            .chain(self.store.all_airlines().iter().cloned())
            .collect()
    }

    /// Turn a selector choice back into a filter value.
    pub fn airline_filter(choice: &str) -> AirlineFilter {
        if choice == ALL_AIRLINES {
            AirlineFilter::All
        } else {
            AirlineFilter::only(choice)
        }
    }

    /// The initial selection: every airline, the store's full date span and
    /// every sentiment.
    pub fn default_filter(&self) -> FilterState {
        FilterState::for_store(&self.store)
    }

    /// Summary of the records selected by `filter`.
    pub fn render(&self, filter: &FilterState) -> DashboardView {
        let filtered = apply(&self.store, filter);
        DashboardView {
            filter: filter.clone(),
            summary: summarize(filtered),
            banner: self.load_error.clone(),
            generated_at: Local::now(),
        }
    }

    /// Word-cloud input for the selected records with the given sentiment.
    pub fn word_cloud(&self, filter: &FilterState, sentiment: Sentiment) -> WordCloudData {
        let filtered = apply(&self.store, filter);
        let corpus = corpus_for(filtered, sentiment);
        let terms = self.term_counter.count(&corpus);
        WordCloudData {
            sentiment,
            corpus,
            terms,
            colors: self.palette.colors(sentiment).clone(),
        }
    }

    /// Classify a single piece of text, unrelated to the stored labels.
    pub fn analyze(&self, text: &str) -> ClassificationResult {
        self.classifier.classify(text)
    }

    pub fn palette(&self) -> &SentimentPalette {
        &self.palette
    }
}

fn load_banner(error: &ContrailError) -> String {
    match error {
        ContrailError::Load(detail) => format!("Error loading data: {detail}"),
        other => format!("Error loading data: {other}"),
    }
}
