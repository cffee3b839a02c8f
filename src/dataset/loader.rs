//! CSV dataset loader.
//!
//! Reads a dataset whose first row names the columns:
//! ```csv
//! tweet_id,airline_sentiment,airline,text,tweet_created
//! 570306133677760513,neutral,Virgin America,@VirginAmerica What @dhepburn said.,2015-02-24 11:35:52 -0800
//! ```
//!
//! Only the four mapped columns are read; any other column is ignored. Every
//! row must carry an airline, a known sentiment label and a parseable
//! timestamp. The first offending row aborts the whole load.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use csv::{ReaderBuilder, StringRecord};
use log::info;
use serde::{Deserialize, Serialize};

use crate::dataset::record::Record;
use crate::dataset::sentiment::Sentiment;
use crate::dataset::store::RecordStore;
use crate::error::{ContrailError, Result};

/// Timestamp layouts with an explicit offset, tried in order.
const OFFSET_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S %z", "%Y-%m-%d %H:%M:%S%z"];

/// Timestamp layouts without an offset; interpreted as UTC.
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Names of the dataset columns holding each record field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnMapping {
    pub text: String,
    pub airline: String,
    pub sentiment: String,
    pub created_at: String,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        ColumnMapping {
            text: "text".to_string(),
            airline: "airline".to_string(),
            sentiment: "airline_sentiment".to_string(),
            created_at: "tweet_created".to_string(),
        }
    }
}

/// Column positions resolved against a header row.
struct ColumnIndices {
    text: usize,
    airline: usize,
    sentiment: usize,
    created_at: usize,
}

impl ColumnIndices {
    fn resolve(headers: &StringRecord, mapping: &ColumnMapping) -> Result<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|header| header.trim() == name)
                .ok_or_else(|| ContrailError::load(format!("missing required column '{name}'")))
        };

        Ok(ColumnIndices {
            text: find(&mapping.text)?,
            airline: find(&mapping.airline)?,
            sentiment: find(&mapping.sentiment)?,
            created_at: find(&mapping.created_at)?,
        })
    }
}

/// Loads a [`RecordStore`] from CSV input.
#[derive(Debug, Clone)]
pub struct DatasetLoader {
    columns: ColumnMapping,
    delimiter: u8,
}

impl Default for DatasetLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetLoader {
    /// Create a loader for comma-separated input with the default columns.
    pub fn new() -> Self {
        DatasetLoader {
            columns: ColumnMapping::default(),
            delimiter: b',',
        }
    }

    /// Use a custom column mapping.
    pub fn with_columns(mut self, columns: ColumnMapping) -> Self {
        self.columns = columns;
        self
    }

    /// Set a custom delimiter character.
    ///
    /// The CSV reader splits on single bytes, so only ASCII delimiters are
    /// accepted.
    pub fn with_delimiter(mut self, delimiter: char) -> Result<Self> {
        if !delimiter.is_ascii() {
            return Err(ContrailError::config(format!(
                "delimiter must be an ASCII character, got '{delimiter}'"
            )));
        }
        self.delimiter = delimiter as u8;
        Ok(self)
    }

    /// Load the dataset stored at `path`.
    pub fn load_path<P: AsRef<Path>>(&self, path: P) -> Result<RecordStore> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            ContrailError::load(format!("cannot open dataset {}: {e}", path.display()))
        })?;
        let store = self.load_reader(file)?;
        info!(
            "Loaded {} records ({} airlines) from {}",
            store.len(),
            store.all_airlines().len(),
            path.display()
        );
        Ok(store)
    }

    /// Load the dataset from any reader.
    pub fn load_reader<R: Read>(&self, input: R) -> Result<RecordStore> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(csv::Trim::None)
            .flexible(false)
            .from_reader(input);

        let headers = reader
            .headers()
            .map_err(|e| ContrailError::load(format!("failed to read CSV header: {e}")))?
            .clone();
        let columns = ColumnIndices::resolve(&headers, &self.columns)?;

        let mut records = Vec::new();
        for (id, row) in reader.records().enumerate() {
            let row = row.map_err(|e| ContrailError::load(format!("row {}: {e}", id + 1)))?;
            records.push(self.parse_row(id, &row, &columns)?);
        }

        Ok(RecordStore::from_records(records))
    }

    fn parse_row(&self, id: usize, row: &StringRecord, columns: &ColumnIndices) -> Result<Record> {
        let field = |index: usize| row.get(index).unwrap_or("");
        let row_error = |msg: String| ContrailError::load(format!("row {}: {msg}", id + 1));

        let airline = field(columns.airline).trim();
        if airline.is_empty() {
            return Err(row_error(format!("empty '{}'", self.columns.airline)));
        }

        let sentiment = field(columns.sentiment)
            .parse::<Sentiment>()
            .map_err(|e| row_error(e.to_string()))?;

        let raw_timestamp = field(columns.created_at);
        let created_at = parse_timestamp(raw_timestamp)
            .ok_or_else(|| row_error(format!("unparseable timestamp '{raw_timestamp}'")))?;

        Ok(Record::new(
            id,
            field(columns.text),
            airline,
            sentiment,
            created_at,
        ))
    }
}

/// Parse a timestamp with at least day precision.
///
/// Values without an offset are taken as UTC.
pub fn parse_timestamp(value: &str) -> Option<DateTime<FixedOffset>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Some(ts);
    }
    for format in OFFSET_FORMATS {
        if let Ok(ts) = DateTime::parse_from_str(value, format) {
            return Some(ts);
        }
    }
    for format in NAIVE_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(value, format) {
            return Some(ts.and_utc().fixed_offset());
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|ts| ts.and_utc().fixed_offset())
}
