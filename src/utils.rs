// Utility functions
use crate::model::ParseError;
use chrono::NaiveDate;

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m-%d-%Y", "%d-%b-%Y"];

/// Parses a date cell. Month-only cells (`2024-03`) resolve to the first of the month.
pub fn parse_date(text: &str) -> Result<NaiveDate, ParseError> {
    let text = text.trim();
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, fmt) {
            return Ok(date);
        }
    }
    NaiveDate::parse_from_str(&format!("{}-01", text), "%Y-%m-%d")
        .map_err(|_| ParseError::Date(text.to_string()))
}

/// Parses a value cell into a finite float.
pub fn parse_value(text: &str) -> Result<f64, ParseError> {
    let text = text.trim();
    match text.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ParseError::Value(text.to_string())),
    }
}

/// Substitutes the ticker into a URL template.
pub fn build_url(template: &str, ticker: &str) -> String {
    template.replace("{ticker}", ticker)
}
