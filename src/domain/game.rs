use url::Url;

/// Fields pulled from a game's detail page. Each one is looked up on its own
/// and is `None` when the page doesn't carry it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameRecord {
    pub player_count: Option<String>,
    pub play_time: Option<String>,
    pub rank: Option<String>,
    pub description: Option<String>,
}

/// A resolved game: the page it was found on and what was extracted from it.
#[derive(Debug, Clone, PartialEq)]
pub struct GameLookup {
    pub url: Url,
    pub record: GameRecord,
}
