use crate::model::{ScraperError, Series};
use crate::normalizer::normalize;
use crate::parser::Parser;
use crate::scraper::Scraper;
use tracing::{info, warn};

/// Fetches and normalizes the forward PE history for `ticker`.
///
/// An empty series means the page was read but held no usable rows.
pub async fn fetch_series<S, P>(scraper: &S, parser: &P, ticker: &str) -> Result<Series, ScraperError>
where
    S: Scraper + ?Sized,
    P: Parser + ?Sized,
{
    let result = async {
        let html = scraper.fetch(ticker).await?;
        let raw = parser.parse(&html)?;
        Ok::<_, ScraperError>(normalize(ticker, &raw))
    }
    .await;

    match &result {
        Ok(series) if series.is_empty() => warn!("No usable forward PE rows for {}", ticker),
        Ok(series) => info!("Fetched {} forward PE rows for {}", series.len(), ticker),
        Err(e) => warn!("Failed to fetch {}: {}", ticker, e),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::GuruFocusParser;
    use chrono::NaiveDate;

    struct FakeScraper(Result<String, ScraperError>);

    #[async_trait::async_trait]
    impl Scraper for FakeScraper {
        async fn fetch(&self, _ticker: &str) -> Result<String, ScraperError> {
            self.0.clone()
        }
    }

    fn page(dates: &[&str], values: &[&str]) -> String {
        let header: String = dates
            .iter()
            .map(|d| format!("<td><strong>{}</strong></td>", d))
            .collect();
        let row: String = values.iter().map(|v| format!("<td>{}</td>", v)).collect();
        format!(
            "<html><body><table>\
             <tr><td><strong>Quarterly Data</strong></td>{}</tr>\
             <tr><td>Forward PE Ratio</td>{}</tr>\
             </table></body></html>",
            header, row
        )
    }

    #[tokio::test]
    async fn full_page_becomes_sorted_series() {
        let scraper = FakeScraper(Ok(page(
            &["2024-01-01", "2024-01-02", "2024-01-03"],
            &["20.0", "-", "24.0"],
        )));
        let series = fetch_series(&scraper, &GuruFocusParser::new(), "AAPL")
            .await
            .unwrap();

        assert_eq!(series.symbol, "AAPL");
        assert_eq!(series.len(), 3);
        assert_eq!(series.observations[0].date, NaiveDate::from_ymd_opt(2024, 1, 3));
        assert_eq!(series.observations[1].value, None);
        assert_eq!(series.values(), vec![24.0, 20.0]);
    }

    #[tokio::test]
    async fn five_dates_three_values() {
        let scraper = FakeScraper(Ok(page(
            &["2023-01", "2023-02", "2023-03", "2023-04", "2023-05"],
            &["1", "2", "3"],
        )));
        let series = fetch_series(&scraper, &GuruFocusParser::new(), "AAPL")
            .await
            .unwrap();
        assert_eq!(series.len(), 3);
        assert_eq!(series.values(), vec![3.0, 2.0, 1.0]);
    }

    #[tokio::test]
    async fn missing_section_is_not_found() {
        let scraper = FakeScraper(Ok("<html><body>nothing here</body></html>".into()));
        let err = fetch_series(&scraper, &GuruFocusParser::new(), "ZZZZ")
            .await
            .unwrap_err();
        assert!(matches!(err, ScraperError::NotFound(_)));
    }

    #[tokio::test]
    async fn http_failure_passes_through() {
        let scraper = FakeScraper(Err(ScraperError::Http { status: 404 }));
        let err = fetch_series(&scraper, &GuruFocusParser::new(), "ZZZZ")
            .await
            .unwrap_err();
        assert_eq!(err, ScraperError::Http { status: 404 });
    }

    #[tokio::test]
    async fn empty_table_is_ok_but_empty() {
        let scraper = FakeScraper(Ok(page(&[], &[])));
        let series = fetch_series(&scraper, &GuruFocusParser::new(), "AAPL")
            .await
            .unwrap();
        assert!(series.is_empty());
    }
}
