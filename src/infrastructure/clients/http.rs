use crate::domain::PageFetcher;
use crate::error::Result;
use reqwest::Client;
use tracing::debug;
use url::Url;

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl PageFetcher for HttpFetcher {
    async fn fetch_page(&self, url: &Url) -> Result<String> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        debug!("Fetched {} bytes from {url}", body.len());

        Ok(body)
    }
}
