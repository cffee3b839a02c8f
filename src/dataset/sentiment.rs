//! Sentiment labels shared by the stored records and the classifier.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ContrailError, Result};

/// A discrete sentiment label.
///
/// The same enum is used for the ground-truth label stored with every record
/// and for the classifier output. The two are never mixed: a record's label is
/// fixed at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// All labels in canonical order.
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative];

    /// The lowercase name used in datasets and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Sentiment::Positive => 0,
            Sentiment::Neutral => 1,
            Sentiment::Negative => 2,
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sentiment {
    type Err = ContrailError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "positive" => Ok(Sentiment::Positive),
            "neutral" => Ok(Sentiment::Neutral),
            "negative" => Ok(Sentiment::Negative),
            other => Err(ContrailError::load(format!(
                "unknown sentiment label '{other}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Positive".parse::<Sentiment>().unwrap(), Sentiment::Positive);
        assert_eq!(" NEUTRAL ".parse::<Sentiment>().unwrap(), Sentiment::Neutral);
        assert_eq!("negative".parse::<Sentiment>().unwrap(), Sentiment::Negative);
    }

    #[test]
    fn test_parse_rejects_unknown_labels() {
        assert!("mixed".parse::<Sentiment>().is_err());
        assert!("".parse::<Sentiment>().is_err());
    }

    #[test]
    fn test_display_and_serde_agree() {
        for sentiment in Sentiment::ALL {
            let json = serde_json::to_string(&sentiment).unwrap();
            assert_eq!(json, format!("\"{sentiment}\""));
        }
    }
}
