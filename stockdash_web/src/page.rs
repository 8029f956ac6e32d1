//! HTML serialization of the dashboard view.

use stockdash_lib::types::Bar;
use stockdash_lib::validation::MAX_TICKER_LENGTH;

use crate::charts;
use crate::view::{Content, DashboardView};

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

const STYLE: &str = "\
body { font-family: sans-serif; max-width: 960px; margin: 2em auto; padding: 0 1em; }\n\
form { margin-bottom: 1.5em; }\n\
form label { margin-right: 1em; }\n\
table { border-collapse: collapse; width: 100%; margin-bottom: 2em; }\n\
th, td { border: 1px solid #ccc; padding: 0.3em 0.6em; text-align: right; }\n\
th { background: #f0f0f0; }\n\
td:first-child, th:first-child { text-align: left; }\n\
.warning { color: #b45309; margin-bottom: 1em; }\n\
.error { color: #b91c1c; margin-bottom: 1em; }\n";

/// Serializes the view to a full HTML document.
pub fn render(view: &DashboardView) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>Stock Price App</title>\n");
    html.push_str(&format!("<script src=\"{}\"></script>\n", PLOTLY_CDN));
    html.push_str(&format!("<style>\n{}</style>\n", STYLE));
    html.push_str("</head>\n<body>\n");
    html.push_str("<h1>\u{1F4C8} Stock Price App</h1>\n");
    html.push_str(
        "<p>This app retrieves the stock <strong>closing price</strong> and \
         <strong>volume</strong> of any company!</p>\n",
    );

    html.push_str(&render_form(view));

    if let Some(warning) = &view.warning {
        html.push_str(&format!(
            "<p class=\"warning\">{}</p>\n",
            escape_html(warning)
        ));
    }

    match &view.content {
        Content::Data { header, series } => {
            html.push_str(&format!("<h2>{}</h2>\n", escape_html(header)));
            html.push_str(&render_table(series));
            html.push_str(&charts::close_chart_html(&view.ticker, series));
            html.push('\n');
            html.push_str(&charts::volume_chart_html(&view.ticker, series));
            html.push('\n');
        }
        Content::Unavailable { message } => {
            html.push_str(&format!("<p class=\"error\">{}</p>\n", escape_html(message)));
        }
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn render_form(view: &DashboardView) -> String {
    format!(
        "<form method=\"get\" action=\"/\">\n\
         <label>Ticker Symbol <input type=\"text\" name=\"ticker\" value=\"{}\" maxlength=\"{}\"></label>\n\
         <label>Start Date <input type=\"date\" name=\"start\" value=\"{}\"></label>\n\
         <label>End Date <input type=\"date\" name=\"end\" value=\"{}\"></label>\n\
         <button type=\"submit\">Show</button>\n\
         </form>\n",
        escape_html(&view.ticker),
        MAX_TICKER_LENGTH,
        view.start,
        view.end,
    )
}

fn render_table(series: &[Bar]) -> String {
    let mut table = String::from(
        "<table>\n<tr><th>Date</th><th>Open</th><th>High</th><th>Low</th>\
         <th>Close</th><th>Volume</th></tr>\n",
    );
    for bar in series {
        table.push_str(&format!(
            "<tr><td>{}</td><td>{:.2}</td><td>{:.2}</td><td>{:.2}</td><td>{:.2}</td><td>{}</td></tr>\n",
            bar.date, bar.open, bar.high, bar.low, bar.close, bar.volume
        ));
    }
    table.push_str("</table>\n");
    table
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
