use crate::error::Result;
use url::Url;

/// Retrieves the body of a web page.
pub trait PageFetcher: Send + Sync {
    async fn fetch_page(&self, url: &Url) -> Result<String>;
}
