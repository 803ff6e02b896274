// Core structs: Observation, Series, Summary
use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

/// One (date, forward PE) pair scraped from the quarterly table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Observation {
    /// `None` when the date cell could not be read; the row is still kept.
    pub date: Option<NaiveDate>,
    /// `None` when the cell could not be read as a number.
    pub value: Option<f64>,
}

/// Observations for one ticker, newest first once normalized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub symbol: String,
    pub observations: Vec<Observation>,
}

impl Series {
    pub fn new(symbol: impl Into<String>, observations: Vec<Observation>) -> Self {
        Self {
            symbol: symbol.into(),
            observations,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Present values only.
    pub fn values(&self) -> Vec<f64> {
        self.observations.iter().filter_map(|o| o.value).collect()
    }

    /// Rows that carry a readable date, in series order.
    pub fn dated(&self) -> Vec<(NaiveDate, Option<f64>)> {
        self.observations
            .iter()
            .filter_map(|o| o.date.map(|d| (d, o.value)))
            .collect()
    }
}

/// Raw cell text pulled out of the page before any interpretation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub dates: Vec<String>,
    pub values: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub missing: usize,
    pub mean: Option<f64>,
    pub std_dev: Option<f64>,
    pub max: Option<f64>,
    pub min: Option<f64>,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ScraperError {
    #[error("HTTP error: status {status}")]
    Http { status: u16 },
    #[error("not found: {0}")]
    NotFound(String),
    #[error("request timed out")]
    Timeout,
    #[error("scrape failed: {0}")]
    Scrape(String),
}

/// Per-cell interpretation failure. Never fatal for a fetch.
#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("unrecognized date: {0:?}")]
    Date(String),
    #[error("not a number: {0:?}")]
    Value(String),
}
