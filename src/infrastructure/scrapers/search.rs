use super::parse_selector;
use crate::error::Result;
use scraper::{Html, Selector};

/// Picks the top hit out of a BoardGameGeek search results page.
pub struct SearchScraper {
    top_result: Selector,
    link: Selector,
}

impl SearchScraper {
    pub fn new() -> Result<Self> {
        Ok(Self {
            top_result: parse_selector("#results_objectname1")?,
            link: parse_selector("a")?,
        })
    }

    /// The `href` of the first link inside the first result, or `None` when
    /// the search came back empty.
    pub fn top_match(&self, html: &str) -> Option<String> {
        let document = Html::parse_document(html);
        let container = document.select(&self.top_result).next()?;
        let link = container.select(&self.link).next()?;

        link.value().attr("href").map(str::to_string)
    }
}
