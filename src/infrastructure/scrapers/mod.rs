use crate::error::{GameError, Result};
use scraper::Selector;

pub(crate) mod game_page;
pub(crate) mod search;

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| GameError::Selector(e.to_string()))
}
