//! Line charts for the dashboard, rendered as inline HTML divs.
//!
//! The page is expected to load plotly.js from the CDN before these divs.

use plotly::common::{Mode, Title};
use plotly::layout::Axis;
use plotly::{Layout, Plot, Scatter};
use stockdash_lib::types::Bar;

/// Closing price vs date.
pub fn close_chart_html(ticker: &str, bars: &[Bar]) -> String {
    line_chart_html(
        &format!("Closing Price of {}", ticker),
        "Closing Price",
        "close-chart",
        bars.iter().map(|b| b.date.to_string()).collect(),
        bars.iter().map(|b| b.close).collect(),
    )
}

/// Trading volume vs date.
pub fn volume_chart_html(ticker: &str, bars: &[Bar]) -> String {
    line_chart_html(
        &format!("Trading Volume of {}", ticker),
        "Volume",
        "volume-chart",
        bars.iter().map(|b| b.date.to_string()).collect(),
        bars.iter().map(|b| b.volume as f64).collect(),
    )
}

fn line_chart_html(
    title: &str,
    y_label: &str,
    div_id: &str,
    x: Vec<String>,
    y: Vec<f64>,
) -> String {
    let trace = Scatter::new(x, y).mode(Mode::Lines);
    let mut plot = Plot::new();
    plot.add_trace(trace);
    plot.set_layout(
        Layout::new()
            .title(Title::with_text(title))
            .x_axis(Axis::new().title(Title::with_text("Date")))
            .y_axis(Axis::new().title(Title::with_text(y_label))),
    );
    plot.to_inline_html(Some(div_id))
}
