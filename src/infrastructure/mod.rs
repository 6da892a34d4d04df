mod clients;
mod scrapers;

pub use clients::http::HttpFetcher;
pub use scrapers::{game_page::GamePageScraper, search::SearchScraper};
