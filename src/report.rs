// Plain-text rendering of one ticker's results.
use crate::model::{Series, Summary};
use std::fmt::Write;

/// The one message shown for every failure kind and for an empty result.
pub fn unavailable_message(ticker: &str) -> String {
    format!("could not retrieve data for {} — check the symbol", ticker)
}

fn metric(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => "n/a".to_string(),
    }
}

pub fn render_summary(ticker: &str, summary: &Summary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "📊 {} forward PE summary", ticker);
    let _ = writeln!(out, "  Mean PE : {}", metric(summary.mean));
    let _ = writeln!(out, "  Max     : {}", metric(summary.max));
    let _ = writeln!(out, "  Min     : {}", metric(summary.min));
    let _ = writeln!(out, "  Rows    : {} ({} missing)", summary.count, summary.missing);
    out
}

pub fn render_table(series: &Series) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:>5}  {:<10}  {:>10}", "", "Date", "Forward_PE");
    for (i, o) in series.observations.iter().enumerate() {
        let date = o.date.map(|d| d.to_string()).unwrap_or_else(|| "NaT".to_string());
        let value = o.value.map(|v| v.to_string()).unwrap_or_else(|| "NaN".to_string());
        let _ = writeln!(out, "{:>5}  {:<10}  {:>10}", i, date, value);
    }
    out
}
