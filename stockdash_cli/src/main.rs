mod output;

use std::time::Duration;

use anyhow::Result;
use chrono::{NaiveDate, Utc};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use stockdash_lib::validation::{self, check_date_order};
use stockdash_lib::{HistoryCache, HistoryOutcome, HistoryRequest, HistoryService};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "stockdash")]
#[command(about = "Fetch historical stock prices for a ticker and date range")]
struct Cli {
    /// Ticker symbol
    #[arg(long, default_value = validation::DEFAULT_TICKER)]
    ticker: String,

    /// Start of the date range (YYYY-MM-DD)
    #[arg(long, default_value = "2010-01-01", value_parser = validation::parse_date)]
    start: NaiveDate,

    /// End of the date range (YYYY-MM-DD), defaults to today
    #[arg(long, value_parser = validation::parse_date)]
    end: Option<NaiveDate>,

    /// Output format: table, markdown, json, or csv
    #[arg(long, default_value = "table")]
    output: String,

    /// Seconds a fetched result stays cached
    #[arg(long, default_value_t = 600)]
    cache_ttl_secs: u64,

    /// Maximum number of cached queries
    #[arg(long, default_value_t = 64)]
    cache_capacity: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("stockdash_lib=info".parse().unwrap())
                .add_directive("stockdash_api=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        "csv" => OutputFormat::Csv,
        "markdown" => OutputFormat::Markdown,
        _ => OutputFormat::Table,
    };

    let ticker = validation::normalize_ticker(&cli.ticker);
    let end = cli.end.unwrap_or_else(|| Utc::now().date_naive());

    if let Some(warning) = check_date_order(cli.start, end) {
        eprintln!("{}", warning);
    }

    let cache = HistoryCache::new(Duration::from_secs(cli.cache_ttl_secs), cli.cache_capacity);
    let service = HistoryService::new(cache);
    let request = HistoryRequest::new(&ticker, cli.start, end);

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
    spinner.set_message(format!("Fetching history for {}...", request.ticker));
    spinner.enable_steady_tick(Duration::from_millis(100));
    let outcome = service.fetch(&request).await;
    spinner.finish_and_clear();

    match outcome {
        HistoryOutcome::Series(bars) => {
            println!(
                "Showing data for {} from {} to {}",
                request.ticker, request.start, request.end
            );
            match format {
                OutputFormat::Table => output::print_series_table(&bars),
                OutputFormat::Markdown => output::print_series_markdown(&bars),
                OutputFormat::Json => output::print_json(&bars),
                OutputFormat::Csv => output::print_series_csv(&bars)?,
            }
        }
        // both sentinel faces render the same message, and nothing is fatal
        HistoryOutcome::Empty | HistoryOutcome::Failed(_) => {
            println!(
                "Unable to retrieve data for ticker symbol '{}'. Please check the symbol and try again.",
                request.ticker
            );
        }
    }

    Ok(())
}
