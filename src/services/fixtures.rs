use crate::config::Site;
use crate::domain::{GameRecord, PageFetcher};
use crate::error::{GameError, Result};
use std::collections::HashMap;
use url::Url;

pub const EMPTY_SEARCH: &str = "<html><body><p>Your search returned no results.</p></body></html>";

pub const CATAN_PAGE: &str = r#"
    <html>
      <head><meta name="description" content="Trade, build and settle..."></head>
      <body>
        <div id="edit_players"><div>Players</div><div>3–4</div></div>
        <div id="edit_playtime"><div>Playing Time</div><div>60</div></div>
        <table><tr><td><div class="mf nw b">Board Game Rank: 429</div></td></tr></table>
      </body>
    </html>
"#;

pub fn search_page(href: &str) -> String {
    format!(
        r#"<html><body><table><tr>
             <td id="results_objectname1"><a href="{href}">result</a></td>
           </tr></table></body></html>"#
    )
}

pub fn site() -> Site {
    Site::boardgamegeek().unwrap()
}

pub fn catan_record() -> GameRecord {
    GameRecord {
        player_count: Some("3–4".to_string()),
        play_time: Some("60".to_string()),
        rank: Some("429".to_string()),
        description: Some("Trade, build and settle...".to_string()),
    }
}

pub fn catan_fetcher() -> StaticFetcher {
    let site = site();
    StaticFetcher::default()
        .with_page(site.search_url("Catan"), &search_page("/boardgame/13/catan"))
        .with_page(site.game_url("/boardgame/13/catan").unwrap(), CATAN_PAGE)
}

/// Serves canned pages by URL; anything else is an error.
#[derive(Default)]
pub struct StaticFetcher {
    pages: HashMap<String, String>,
}

impl StaticFetcher {
    pub fn with_page(mut self, url: Url, body: &str) -> Self {
        self.pages.insert(url.to_string(), body.to_string());
        self
    }
}

impl PageFetcher for StaticFetcher {
    async fn fetch_page(&self, url: &Url) -> Result<String> {
        self.pages
            .get(url.as_str())
            .cloned()
            .ok_or_else(|| GameError::Other(format!("unexpected request to {url}")))
    }
}
