mod fetcher;
mod game;
mod notes;

pub use fetcher::PageFetcher;
pub use game::{GameLookup, GameRecord};
pub use notes::NoteMap;
