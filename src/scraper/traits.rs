use crate::model::ScraperError;

#[async_trait::async_trait]
pub trait Scraper: Send + Sync {
    /// Returns the page body for `ticker`.
    async fn fetch(&self, ticker: &str) -> Result<String, ScraperError>;
}
