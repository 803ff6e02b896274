mod analyzer;
mod config;
mod model;
mod normalizer;
mod parser;
mod pipeline;
mod report;
mod scraper;
mod utils;

use crate::analyzer::{Analyzer, AnalyzerImpl};
use crate::config::{load_config, AppConfig};
use crate::parser::GuruFocusParser;
use crate::pipeline::fetch_series;
use crate::scraper::ScraperImpl;
use std::process::ExitCode;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_TICKER: &str = "AAPL";

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Set panic hook to log details about any panic
    std::panic::set_hook(Box::new(|panic_info| {
        error!("😱 Panic occurred: {}", panic_info);
    }));

    let config = match load_config("config.json") {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let scraper = match ScraperImpl::new(&config) {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to build HTTP client: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let parser = GuruFocusParser::new();
    let analyzer = AnalyzerImpl::new();

    let mut tickers: Vec<String> = std::env::args()
        .skip(1)
        .map(|t| t.trim().to_uppercase())
        .filter(|t| !t.is_empty())
        .collect();
    if tickers.is_empty() {
        tickers.push(DEFAULT_TICKER.to_string());
    }

    let mut failures = 0;
    for ticker in &tickers {
        if !process_ticker(ticker, &scraper, &parser, &analyzer, &config).await {
            failures += 1;
        }
    }

    if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Runs one ticker through fetch, summary and chart. Returns false when no data could be shown.
async fn process_ticker(
    ticker: &str,
    scraper: &ScraperImpl,
    parser: &GuruFocusParser,
    analyzer: &AnalyzerImpl,
    config: &AppConfig,
) -> bool {
    info!("Analyzing {}...", ticker);

    let series = match fetch_series(scraper, parser, ticker).await {
        Ok(series) if !series.is_empty() => series,
        Ok(_) => {
            println!("{}", report::unavailable_message(ticker));
            return false;
        }
        Err(e) => {
            warn!("{}: {}", ticker, e);
            println!("{}", report::unavailable_message(ticker));
            return false;
        }
    };

    let summary = analyzer.summarize(&series);
    println!("{}", report::render_summary(ticker, &summary));
    println!("{}", report::render_table(&series));

    let chart = analyzer.analyze(&series, ticker, config.band_width);
    info!(
        "Bands for {}: mean = {:.2}, std_dev = {:.2}, upper = {:.2}, lower = {:.2}",
        ticker, chart.bands.mean, chart.bands.std_dev, chart.bands.upper, chart.bands.lower
    );

    if config.chart_output {
        match chart.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => warn!("Failed to serialize chart for {}: {}", ticker, e),
        }
    }

    true
}
