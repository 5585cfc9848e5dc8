use reqwest::{Client, StatusCode};
use std::sync::Arc;
use thiserror::Error;

use crate::constants::{JMA_FORECAST_BASE, USER_AGENT};
use crate::models::RawForecastDocument;
use crate::region::Region;

#[derive(Error, Debug)]
pub enum FetchError {
    /// Network failure, or a body that is not JSON
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Request failed with status: {status}")]
    Http { status: StatusCode },
}

/// Retrieves the forecast feed for a region. No retries and no caching.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Arc<Client>,
    base_url: String,
}

impl Fetcher {
    pub fn new() -> Result<Self, FetchError> {
        Self::new_with_base_url(JMA_FORECAST_BASE)
    }

    pub fn new_with_base_url(base_url: &str) -> Result<Self, FetchError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            client: Arc::new(client),
            base_url: base_url.to_string(),
        })
    }

    pub async fn fetch(&self, region: Region) -> Result<RawForecastDocument, FetchError> {
        let url = region.endpoint(&self.base_url);
        tracing::debug!("Fetching forecast for {} from {}", region, url);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http { status });
        }

        let doc = response.json::<RawForecastDocument>().await?;
        Ok(doc)
    }
}
