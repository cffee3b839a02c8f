//! Output formatting for CLI commands.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::aggregate::corpus::TermCount;
use crate::aggregate::summary::SentimentCounts;
use crate::analysis::classifier::ClassificationResult;
use crate::cli::args::{ContrailArgs, OutputFormat};
use crate::dashboard::palette::SentimentColors;
use crate::dashboard::session::DashboardView;
use crate::dataset::sentiment::Sentiment;
use crate::error::Result;

/// Result structure for the airlines command.
#[derive(Debug, Serialize, Deserialize)]
pub struct AirlineList {
    pub airlines: Vec<String>,
    pub banner: Option<String>,
}

/// Result structure for the corpus command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CorpusReport {
    pub sentiment: Sentiment,
    pub colors: SentimentColors,
    /// Distinct terms before truncation to `terms`.
    pub distinct_terms: usize,
    pub terms: Vec<TermCount>,
    pub corpus: Option<String>,
    pub banner: Option<String>,
}

/// One scored input of the classify command.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClassificationReport {
    pub text: String,
    #[serde(flatten)]
    pub result: ClassificationResult,
}

/// Human-readable rendering of a command result.
pub trait HumanOutput {
    fn to_human(&self) -> String;
}

/// Output a result in the format selected on the command line.
pub fn output_result<T: Serialize + HumanOutput>(result: &T, args: &ContrailArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => print!("{}", result.to_human()),
        OutputFormat::Json => println!("{}", format_json(result, args.pretty)?),
    }
    Ok(())
}

fn format_json<T: Serialize>(result: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(json)
}

impl HumanOutput for DashboardView {
    fn to_human(&self) -> String {
        let summary = &self.summary;
        let mut out = String::new();

        let _ = writeln!(out, "Airline: {}", self.filter.airline);
        match self.filter.date_range.and_then(|range| range.bounds()) {
            Some((start, end)) => {
                let _ = writeln!(out, "Dates:   {start} to {end}");
            }
            None => {
                let _ = writeln!(out, "Dates:   any");
            }
        }
        let _ = writeln!(out, "Posts:   {}", summary.total_count);
        let _ = writeln!(out);

        let _ = writeln!(out, "Sentiment");
        let _ = writeln!(out, "─────────");
        for sentiment in Sentiment::ALL {
            let _ = writeln!(
                out,
                "{:<10}{:>8}{:>9}",
                sentiment.as_str(),
                summary.count_by_sentiment.get(sentiment),
                format_percent(summary.share_by_sentiment.get(sentiment))
            );
        }

        if !summary.daily_timeseries.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "Daily");
            let _ = writeln!(out, "─────");
            for bucket in &summary.daily_timeseries {
                let _ = writeln!(out, "{}  {}", bucket.date, format_counts(&bucket.counts));
            }
        }

        if !summary.airline_breakdown.is_empty() {
            let width = summary
                .airline_breakdown
                .keys()
                .map(|airline| airline.chars().count())
                .max()
                .unwrap_or(0);
            let _ = writeln!(out);
            let _ = writeln!(out, "Airlines");
            let _ = writeln!(out, "────────");
            for (airline, counts) in &summary.airline_breakdown {
                let _ = writeln!(out, "{airline:<width$}  {}", format_counts(counts));
            }
        }

        out
    }
}

impl HumanOutput for CorpusReport {
    fn to_human(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "Top terms in {} posts ({} distinct, colormap {})",
            self.sentiment, self.distinct_terms, self.colors.colormap
        );
        if self.terms.is_empty() {
            let _ = writeln!(out, "No text available for the current selection.");
            return out;
        }
        for (rank, term) in self.terms.iter().enumerate() {
            let _ = writeln!(out, "{:>4}. {:<20}{:>6}", rank + 1, term.term, term.count);
        }
        if let Some(corpus) = &self.corpus {
            let _ = writeln!(out);
            let _ = writeln!(out, "{corpus}");
        }
        out
    }
}

impl HumanOutput for AirlineList {
    fn to_human(&self) -> String {
        self.airlines.iter().fold(String::new(), |mut out, airline| {
            let _ = writeln!(out, "{airline}");
            out
        })
    }
}

impl HumanOutput for Vec<ClassificationReport> {
    fn to_human(&self) -> String {
        let mut out = String::new();
        for report in self {
            let _ = writeln!(
                out,
                "{:<9}{:>+7.3}  {}",
                report.result.label.as_str(),
                report.result.polarity,
                report.text
            );
            if !report.result.matched_terms.is_empty() {
                let terms = report
                    .result
                    .matched_terms
                    .iter()
                    .map(|scored| format!("{} ({:+.2})", scored.term, scored.score))
                    .collect::<Vec<_>>()
                    .join(", ");
                let _ = writeln!(out, "         matched: {terms}");
            }
        }
        out
    }
}

/// Format a share in `[0, 1]` as a percentage with one decimal.
fn format_percent(share: f64) -> String {
    format!("{:.1}%", share * 100.0)
}

fn format_counts(counts: &SentimentCounts) -> String {
    format!(
        "pos {:>5}  neu {:>5}  neg {:>5}",
        counts.positive, counts.neutral, counts.negative
    )
}
