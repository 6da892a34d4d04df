use crate::config::Site;
use crate::domain::{GameLookup, PageFetcher};
use crate::error::{GameError, Result};
use crate::infrastructure::{GamePageScraper, SearchScraper};
use tracing::{debug, info, warn};

/// Resolves a game name to its BoardGameGeek page and extracts the record.
pub struct LookupService<F> {
    fetcher: F,
    site: Site,
    search: SearchScraper,
    game_page: GamePageScraper,
}

impl<F: PageFetcher> LookupService<F> {
    pub fn new(fetcher: F, site: Site) -> Result<Self> {
        Ok(Self {
            fetcher,
            site,
            search: SearchScraper::new()?,
            game_page: GamePageScraper::new()?,
        })
    }

    pub async fn lookup(&self, game: &str) -> Result<GameLookup> {
        let search_url = self.site.search_url(game);
        debug!("Searching for {game} at {search_url}");

        let results = self.fetcher.fetch_page(&search_url).await?;
        let href = self
            .search
            .top_match(&results)
            .ok_or_else(|| GameError::NoSearchResult(game.to_string()))?;

        let url = self.site.game_url(&href)?;
        info!("Top match for {game}: {url}");

        let page = self.fetcher.fetch_page(&url).await?;
        let record = self.game_page.extract(&page);

        for (field, value) in [
            ("player count", &record.player_count),
            ("play time", &record.play_time),
            ("rank", &record.rank),
            ("description", &record.description),
        ] {
            if value.is_none() {
                warn!("No {field} found for {game}");
            }
        }

        Ok(GameLookup { url, record })
    }
}
