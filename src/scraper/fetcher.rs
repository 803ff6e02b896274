use crate::config::AppConfig;
use crate::model::ScraperError;
use crate::scraper::traits::Scraper;
use crate::utils::build_url;

use reqwest::Client;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, warn};

pub struct ScraperImpl {
    pub client: Client,
    pub url_template: String,
    pub request_timeout: Duration,
}

impl ScraperImpl {
    pub fn new(config: &AppConfig) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| ScraperError::Scrape(e.to_string()))?;

        Ok(Self {
            client,
            url_template: config.url_template.clone(),
            request_timeout: config.request_timeout(),
        })
    }

    fn build_url(&self, ticker: &str) -> String {
        build_url(&self.url_template, ticker)
    }

    async fn get(&self, url: &str) -> Result<String, ScraperError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            warn!("❌ {} responded [{}]", url, status);
            return Err(ScraperError::Http {
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(map_reqwest_error)
    }
}

fn map_reqwest_error(e: reqwest::Error) -> ScraperError {
    if e.is_timeout() {
        ScraperError::Timeout
    } else {
        ScraperError::Scrape(e.to_string())
    }
}

#[async_trait::async_trait]
impl Scraper for ScraperImpl {
    async fn fetch(&self, ticker: &str) -> Result<String, ScraperError> {
        let url = self.build_url(ticker);
        debug!("GET {}", url);

        match timeout(self.request_timeout, self.get(&url)).await {
            Ok(result) => result,
            Err(_) => {
                warn!("⏳ {} timed out after {:?}", url, self.request_timeout);
                Err(ScraperError::Timeout)
            }
        }
    }
}
