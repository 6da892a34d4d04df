use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),
    #[error("Selector error: {0}")]
    Selector(String),
    #[error("Invalid note '{0}': expected exactly one ':' between game name and note")]
    InvalidNote(String),
    #[error("no item found matching {0}")]
    NoSearchResult(String),
    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, GameError>;
