//! Command implementations for the Contrail CLI.

use std::path::PathBuf;

use log::{debug, info};

use crate::analysis::classifier::SentimentClassifier;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::DashboardConfig;
use crate::dashboard::session::Dashboard;
use crate::error::Result;
use crate::filter::state::{DateRange, FilterState, SentimentSet};

/// Execute a CLI command.
pub fn execute_command(args: ContrailArgs) -> Result<()> {
    let config = load_config(&args)?;
    match &args.command {
        Command::Summary(summary_args) => show_summary(summary_args, config, &args),
        Command::Corpus(corpus_args) => show_corpus(corpus_args, config, &args),
        Command::Airlines(airlines_args) => list_airlines(airlines_args, config, &args),
        Command::Classify(classify_args) => classify_text(classify_args, config, &args),
    }
}

fn load_config(args: &ContrailArgs) -> Result<DashboardConfig> {
    match &args.config {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            DashboardConfig::from_file(path)
        }
        None => Ok(DashboardConfig::default()),
    }
}

/// Open a session. A load failure is reported once, by the session's error
/// log, and the command goes on with the empty store.
fn open_dashboard(mut config: DashboardConfig, data: Option<&PathBuf>) -> Result<Dashboard> {
    if let Some(path) = data {
        config.dataset.path = path.clone();
    }
    Dashboard::open(&config)
}

/// Build the filter state from the command line on top of the session default.
fn build_filter(dashboard: &Dashboard, args: &FilterArgs) -> Result<FilterState> {
    let mut filter = dashboard.default_filter();

    if let Some(choice) = &args.airline {
        filter = filter.with_airline(Dashboard::airline_filter(choice));
    }

    if args.from.is_some() || args.to.is_some() {
        let (default_start, default_end) = match filter.date_range {
            Some(range) => (range.start, range.end),
            None => (None, None),
        };
        let range = DateRange::partial(args.from.or(default_start), args.to.or(default_end));
        debug!("Date range from command line: {range:?}");
        filter = filter.with_date_range(Some(range));
    }

    if args.no_sentiments {
        filter = filter.with_sentiments(SentimentSet::empty());
    } else if !args.sentiment.is_empty() {
        filter = filter.with_sentiments(args.sentiment.iter().copied().collect());
    }

    if args.strict {
        filter.validate(dashboard.store())?;
    }
    Ok(filter)
}

fn show_summary(
    args: &SummaryArgs,
    config: DashboardConfig,
    cli_args: &ContrailArgs,
) -> Result<()> {
    let dashboard = open_dashboard(config, args.data.as_ref())?;
    let filter = build_filter(&dashboard, &args.filter)?;
    let view = dashboard.render(&filter);
    output_result(&view, cli_args)
}

fn show_corpus(args: &CorpusArgs, config: DashboardConfig, cli_args: &ContrailArgs) -> Result<()> {
    let dashboard = open_dashboard(config, args.data.as_ref())?;
    let filter = build_filter(&dashboard, &args.filter)?;
    let cloud = dashboard.word_cloud(&filter, args.target);

    let distinct_terms = cloud.terms.len();
    let mut terms = cloud.terms;
    terms.truncate(args.top);

    let report = CorpusReport {
        sentiment: cloud.sentiment,
        colors: cloud.colors,
        distinct_terms,
        terms,
        corpus: args.show_text.then_some(cloud.corpus),
        banner: dashboard.banner().map(str::to_string),
    };
    output_result(&report, cli_args)
}

fn list_airlines(
    args: &AirlinesArgs,
    config: DashboardConfig,
    cli_args: &ContrailArgs,
) -> Result<()> {
    let dashboard = open_dashboard(config, args.data.as_ref())?;
    let result = AirlineList {
        airlines: dashboard.airline_options(),
        banner: dashboard.banner().map(str::to_string),
    };
    output_result(&result, cli_args)
}

fn classify_text(
    args: &ClassifyArgs,
    config: DashboardConfig,
    cli_args: &ContrailArgs,
) -> Result<()> {
    config.validate()?;
    let classifier = SentimentClassifier::new().with_config(config.classifier);
    let reports: Vec<ClassificationReport> = classifier
        .classify_batch(&args.text)
        .into_iter()
        .zip(&args.text)
        .map(|(result, text)| ClassificationReport {
            text: text.clone(),
            result,
        })
        .collect();
    output_result(&reports, cli_args)
}
