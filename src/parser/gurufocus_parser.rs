// GuruFocus-specific HTML parsing
use crate::model::{RawTable, ScraperError};
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

const SECTION_MARKER: &str = "Quarterly Data";
const ROW_LABEL: &str = "Forward PE Ratio";

pub trait Parser {
    fn parse(&self, html: &str) -> Result<RawTable, ScraperError>;
}

pub struct GuruFocusParser;

impl GuruFocusParser {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GuruFocusParser {
    fn default() -> Self {
        Self::new()
    }
}

fn selector(css: &str) -> Result<Selector, ScraperError> {
    Selector::parse(css).map_err(|e| ScraperError::Scrape(e.to_string()))
}

fn text_of(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

impl Parser for GuruFocusParser {
    /// Value cells without any text are skipped. A whitespace-only cell is kept
    /// as an empty string and ends up as a missing value.
    fn parse(&self, html: &str) -> Result<RawTable, ScraperError> {
        let document = Html::parse_document(html);

        let strong_selector = selector("strong")?;
        let row_selector = selector("tr")?;
        let cell_selector = selector("td")?;

        let marker = document
            .select(&strong_selector)
            .find(|s| text_of(*s).contains(SECTION_MARKER))
            .ok_or_else(|| ScraperError::NotFound("no quarterly data table for this ticker".into()))?;

        let table = marker
            .ancestors()
            .filter_map(ElementRef::wrap)
            .find(|e| e.value().name() == "table")
            .ok_or_else(|| ScraperError::NotFound("malformed page: no table".into()))?;

        let dates: Vec<String> = table
            .select(&strong_selector)
            .map(text_of)
            .filter(|t| t.contains('-'))
            .collect();

        let mut values = Vec::new();
        for row in table.select(&row_selector) {
            let cells: Vec<ElementRef> = row.select(&cell_selector).collect();
            let Some(label) = cells.first() else {
                continue;
            };
            if text_of(*label).contains(ROW_LABEL) {
                values = cells[1..]
                    .iter()
                    .filter(|c| c.text().any(|t| !t.is_empty()))
                    .map(|c| text_of(*c))
                    .collect();
                break;
            }
        }

        debug!("Found dates: {:?}", dates);
        debug!("Found PE values: {:?}", values);

        Ok(RawTable { dates, values })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
        <h1>Apple Forward PE Ratio</h1>
        <table>
          <tr><td><strong>Apple Quarterly Data</strong></td>
              <td><strong>2023-09</strong></td><td><strong>2023-12</strong></td>
              <td><strong>2024-03</strong></td><td><strong>Notes</strong></td></tr>
          <tr><td>Price</td><td>171.2</td><td>192.5</td><td>171.5</td></tr>
          <tr><td>Forward PE Ratio</td><td>27.1</td><td></td><td>N/A</td><td>26.4</td></tr>
        </table>
        </body></html>
    "#;

    #[test]
    fn extracts_dates_and_forward_pe_row() {
        let raw = GuruFocusParser::new().parse(PAGE).unwrap();
        assert_eq!(raw.dates, vec!["2023-09", "2023-12", "2024-03"]);
        // Empty cells are skipped, unparseable text is kept for the normalizer.
        assert_eq!(raw.values, vec!["27.1", "N/A", "26.4"]);
    }

    #[test]
    fn whitespace_cell_is_kept_as_blank_value() {
        let html = r#"<table>
            <tr><td><strong>Quarterly Data</strong></td><td><strong>2024-03</strong></td><td><strong>2024-06</strong></td><td><strong>2024-09</strong></td></tr>
            <tr><td>Forward PE Ratio</td><td>25.0</td><td>   </td><td></td><td>27.5</td></tr>
        </table>"#;
        let raw = GuruFocusParser::new().parse(html).unwrap();
        assert_eq!(raw.values, vec!["25.0", "", "27.5"]);
    }

    #[test]
    fn missing_section_is_not_found() {
        let html = "<html><body><table><tr><td><strong>Annual Data</strong></td></tr></table></body></html>";
        let err = GuruFocusParser::new().parse(html).unwrap_err();
        assert_eq!(
            err,
            ScraperError::NotFound("no quarterly data table for this ticker".into())
        );
    }

    #[test]
    fn section_outside_table_is_malformed() {
        let html = "<html><body><p><strong>Quarterly Data</strong></p></body></html>";
        let err = GuruFocusParser::new().parse(html).unwrap_err();
        assert_eq!(err, ScraperError::NotFound("malformed page: no table".into()));
    }

    #[test]
    fn table_without_pe_row_yields_no_values() {
        let html = r#"<table><tr><td><strong>Quarterly Data</strong></td><td><strong>2024-03</strong></td></tr></table>"#;
        let raw = GuruFocusParser::new().parse(html).unwrap();
        assert_eq!(raw.dates, vec!["2024-03"]);
        assert!(raw.values.is_empty());
    }
}
