use anyhow::Result;
use serde::Serialize;
use stockdash_lib::types::Bar;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Markdown,
    Json,
    Csv,
}

#[derive(Tabled, Serialize)]
struct PriceRow {
    #[tabled(rename = "Date")]
    #[serde(rename = "Date")]
    date: String,
    #[tabled(rename = "Open")]
    #[serde(rename = "Open")]
    open: String,
    #[tabled(rename = "High")]
    #[serde(rename = "High")]
    high: String,
    #[tabled(rename = "Low")]
    #[serde(rename = "Low")]
    low: String,
    #[tabled(rename = "Close")]
    #[serde(rename = "Close")]
    close: String,
    #[tabled(rename = "Volume")]
    #[serde(rename = "Volume")]
    volume: u64,
}

fn build_price_rows(bars: &[Bar]) -> Vec<PriceRow> {
    bars.iter()
        .map(|b| PriceRow {
            date: b.date.to_string(),
            open: format!("{:.2}", b.open),
            high: format!("{:.2}", b.high),
            low: format!("{:.2}", b.low),
            close: format!("{:.2}", b.close),
            volume: b.volume,
        })
        .collect()
}

// -- Table output --

pub fn print_series_table(bars: &[Bar]) {
    println!("{}", Table::new(build_price_rows(bars)));
}

// -- Markdown output --

pub fn print_series_markdown(bars: &[Bar]) {
    let mut table = Table::new(build_price_rows(bars));
    table.with(Style::markdown());
    println!("{}", table);
}

// -- CSV output --

pub fn print_series_csv(bars: &[Bar]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in build_price_rows(bars) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}
