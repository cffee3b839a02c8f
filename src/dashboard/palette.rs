//! Per-sentiment colours handed to the presentation layer.

use serde::{Deserialize, Serialize};

use crate::dataset::sentiment::Sentiment;

/// Colours used to draw one sentiment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentColors {
    /// Named colormap for word clouds.
    pub colormap: String,
    /// Accent colour for charts and result boxes.
    pub accent: String,
}

impl SentimentColors {
    fn new(colormap: &str, accent: &str) -> Self {
        SentimentColors {
            colormap: colormap.to_string(),
            accent: accent.to_string(),
        }
    }
}

/// Colour scheme keyed by sentiment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SentimentPalette {
    pub positive: SentimentColors,
    pub neutral: SentimentColors,
    pub negative: SentimentColors,
}

impl Default for SentimentPalette {
    fn default() -> Self {
        SentimentPalette {
            positive: SentimentColors::new("viridis", "#10b981"),
            neutral: SentimentColors::new("plasma", "#f59e0b"),
            negative: SentimentColors::new("Reds", "#ef4444"),
        }
    }
}

impl SentimentPalette {
    pub fn colors(&self, sentiment: Sentiment) -> &SentimentColors {
        match sentiment {
            Sentiment::Positive => &self.positive,
            Sentiment::Neutral => &self.neutral,
            Sentiment::Negative => &self.negative,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette() {
        let palette = SentimentPalette::default();
        assert_eq!(palette.colors(Sentiment::Positive).colormap, "viridis");
        assert_eq!(palette.colors(Sentiment::Neutral).accent, "#f59e0b");
        assert_eq!(palette.colors(Sentiment::Negative).colormap, "Reds");
    }

    #[test]
    fn test_partial_override_from_json() {
        let palette: SentimentPalette =
            serde_json::from_str(r##"{"negative": {"colormap": "magma", "accent": "#000000"}}"##)
                .unwrap();
        assert_eq!(palette.negative.colormap, "magma");
        assert_eq!(palette.positive.colormap, "viridis");
    }
}
