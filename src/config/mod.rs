use crate::config::cli::Args;
use crate::error::Result;
use clap::Parser;
use reqwest::Client;
use std::time::Duration;
use url::Url;

pub(crate) mod cli;

const SEARCH_ENDPOINT: &str = "https://boardgamegeek.com/geeksearch.php";
const SITE_ORIGIN: &str = "http://boardgamegeek.com";

/// Where games are searched for and against which result links are resolved.
#[derive(Debug, Clone)]
pub struct Site {
    pub search_endpoint: Url,
    pub origin: Url,
}

impl Site {
    pub fn boardgamegeek() -> Result<Self> {
        Ok(Self {
            search_endpoint: Url::parse(SEARCH_ENDPOINT)?,
            origin: Url::parse(SITE_ORIGIN)?,
        })
    }

    /// Search page URL for `game`. The name is form-urlencoded, so spaces become `+`.
    pub fn search_url(&self, game: &str) -> Url {
        let mut url = self.search_endpoint.clone();
        url.query_pairs_mut()
            .append_pair("action", "search")
            .append_pair("objecttype", "boardgame")
            .append_pair("q", game)
            .append_pair("B1", "Go");
        url
    }

    pub fn game_url(&self, href: &str) -> Result<Url> {
        Ok(self.origin.join(href)?)
    }
}

pub struct Config {
    pub args: Args,
    pub site: Site,
    pub http_client: Client,
}

impl Config {
    pub fn new() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    pub fn from_args(args: Args) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = args.timeout {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http_client = builder.build()?;

        Ok(Self {
            args,
            site: Site::boardgamegeek()?,
            http_client,
        })
    }
}
