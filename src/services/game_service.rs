use crate::config::Config;
use crate::domain::{NoteMap, PageFetcher};
use crate::error::{GameError, Result};
use crate::infrastructure::HttpFetcher;
use crate::services::lookup::LookupService;
use crate::services::report::ReportWriter;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::info;

pub struct GameService<F> {
    games: Vec<String>,
    notes: NoteMap,
    output: Option<PathBuf>,
    lookup: LookupService<F>,
}

impl GameService<HttpFetcher> {
    pub fn from_config(config: Config) -> Result<Self> {
        let notes = NoteMap::parse(&config.args.additional_notes)?;
        if !notes.is_empty() {
            info!("Loaded notes for {} games", notes.len());
        }
        let lookup = LookupService::new(HttpFetcher::new(config.http_client), config.site)?;

        Ok(Self::new(config.args.games, notes, config.args.output, lookup))
    }
}

impl<F: PageFetcher> GameService<F> {
    pub fn new(
        games: Vec<String>,
        notes: NoteMap,
        output: Option<PathBuf>,
        lookup: LookupService<F>,
    ) -> Self {
        Self {
            games,
            notes,
            output,
            lookup,
        }
    }

    /// Opens the destination, builds the whole report and writes it out. The
    /// destination is truncated up front but only receives the report once
    /// every game has resolved.
    pub async fn run(&self) -> Result<()> {
        let mut destination = open_destination(self.output.as_deref())?;

        let report = self.render().await?;
        destination.write_all(report.as_bytes())?;
        destination.flush()?;

        info!("Wrote report for {} games", self.games.len());
        Ok(())
    }

    pub async fn render(&self) -> Result<String> {
        let progress = ProgressBar::new(self.games.len() as u64);
        progress.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
                .map_err(|e| GameError::Other(e.to_string()))?,
        );

        let mut buffer = Vec::new();
        let result = ReportWriter::new(&mut buffer, &self.notes)
            .write_report(&self.games, &self.lookup, &progress)
            .await;
        progress.finish_and_clear();
        result?;

        String::from_utf8(buffer).map_err(|e| GameError::Other(e.to_string()))
    }
}

fn open_destination(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            info!("Writing report to {}", path.display());
            Ok(Box::new(File::create(path)?))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}
