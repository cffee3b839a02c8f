//! Configuration for a dashboard session.
//!
//! Every field has a default, so a configuration file only needs to name what
//! it changes:
//!
//! ```json
//! {
//!   "dataset": { "path": "data/Tweets.csv" },
//!   "cache": { "ttl_secs": 600 },
//!   "word_cloud": { "max_words": 100, "extra_stopwords": ["flight"] }
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::aggregate::corpus::{DEFAULT_MAX_WORDS, TermCounter};
use crate::analysis::classifier::ClassifierConfig;
use crate::analysis::stop::StopWords;
use crate::dashboard::palette::SentimentPalette;
use crate::dataset::cache::DEFAULT_TTL;
use crate::dataset::loader::{ColumnMapping, DatasetLoader};
use crate::error::{ContrailError, Result};

/// Where and how to read the dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    pub path: PathBuf,
    pub delimiter: char,
    pub columns: ColumnMapping,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        DatasetConfig {
            path: PathBuf::from("Tweets.csv"),
            delimiter: ',',
            columns: ColumnMapping::default(),
        }
    }
}

impl DatasetConfig {
    pub fn loader(&self) -> Result<DatasetLoader> {
        Ok(DatasetLoader::new()
            .with_delimiter(self.delimiter)?
            .with_columns(self.columns.clone()))
    }
}

/// Freshness window of the shared store cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        CacheConfig {
            ttl_secs: DEFAULT_TTL.as_secs(),
        }
    }
}

impl CacheConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}

/// Word-frequency settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordCloudConfig {
    pub max_words: usize,
    /// Start from the built-in English stop words.
    pub default_stopwords: bool,
    pub extra_stopwords: Vec<String>,
}

impl Default for WordCloudConfig {
    fn default() -> Self {
        WordCloudConfig {
            max_words: DEFAULT_MAX_WORDS,
            default_stopwords: true,
            extra_stopwords: Vec::new(),
        }
    }
}

impl WordCloudConfig {
    pub fn stop_words(&self) -> StopWords {
        let base = if self.default_stopwords {
            StopWords::english()
        } else {
            StopWords::new()
        };
        base.with_words(&self.extra_stopwords)
    }

    pub fn term_counter(&self) -> Result<TermCounter> {
        TermCounter::new(self.stop_words(), self.max_words)
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub dataset: DatasetConfig,
    pub cache: CacheConfig,
    pub classifier: ClassifierConfig,
    pub word_cloud: WordCloudConfig,
    pub palette: SentimentPalette,
}

impl DashboardConfig {
    /// Read and validate a JSON configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            ContrailError::config(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let config: DashboardConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.classifier.validate()?;
        if self.word_cloud.max_words == 0 {
            return Err(ContrailError::config("word_cloud.max_words must be at least 1"));
        }
        if !self.dataset.delimiter.is_ascii() {
            return Err(ContrailError::config(format!(
                "dataset.delimiter must be an ASCII character, got '{}'",
                self.dataset.delimiter
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.dataset.path, PathBuf::from("Tweets.csv"));
        assert_eq!(config.dataset.columns.sentiment, "airline_sentiment");
        assert_eq!(config.cache.ttl(), Duration::from_secs(3600));
        assert_eq!(config.classifier.positive_threshold, 0.1);
        assert_eq!(config.word_cloud.max_words, 200);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = DashboardConfig::from_json(
            r#"{"cache": {"ttl_secs": 60}, "word_cloud": {"extra_stopwords": ["Flight"]}}"#,
        )
        .unwrap();
        assert_eq!(config.cache.ttl_secs, 60);
        assert_eq!(config.word_cloud.max_words, 200);
        assert!(config.word_cloud.stop_words().contains("flight"));
        assert!(config.word_cloud.stop_words().contains("the"));
        assert_eq!(config.dataset, DatasetConfig::default());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = DashboardConfig::from_json(r#"{"word_cloud": {"max_words": 0}}"#).unwrap_err();
        assert!(matches!(err, ContrailError::Config(_)));

        let err = DashboardConfig::from_json(
            r#"{"classifier": {"positive_threshold": -0.5, "negative_threshold": 0.5}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ContrailError::Config(_)));

        let err = DashboardConfig::from_json(r#"{"dataset": {"delimiter": "é"}}"#).unwrap_err();
        assert!(matches!(err, ContrailError::Config(_)));
    }

    #[test]
    fn test_malformed_json() {
        let err = DashboardConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, ContrailError::Json(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"dataset": {{"path": "data/tweets.csv", "delimiter": ";"}}}}"#).unwrap();

        let config = DashboardConfig::from_file(file.path()).unwrap();
        assert_eq!(config.dataset.path, PathBuf::from("data/tweets.csv"));
        assert_eq!(config.dataset.delimiter, ';');

        assert!(DashboardConfig::from_file("/no/such/config.json").is_err());
    }
}
