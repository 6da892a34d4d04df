use crate::domain::{GameLookup, NoteMap, PageFetcher};
use crate::error::Result;
use crate::services::lookup::LookupService;
use indicatif::ProgressBar;
use std::io::Write;

/// Written in place of any value the lookup couldn't find.
pub const ABSENT: &str = "N/A";

const RULE_WIDTH: usize = 70;

pub struct ReportWriter<'a, W> {
    out: W,
    notes: &'a NoteMap,
}

impl<'a, W: Write> ReportWriter<'a, W> {
    pub fn new(out: W, notes: &'a NoteMap) -> Self {
        Self { out, notes }
    }

    /// Writes the numbered game list, then looks up each game in order and
    /// writes its detail block. Stops at the first game that fails to resolve.
    pub async fn write_report<F: PageFetcher>(
        &mut self,
        games: &[String],
        lookup: &LookupService<F>,
        progress: &ProgressBar,
    ) -> Result<()> {
        self.write_header(games)?;

        for game in games {
            progress.set_message(format!("Looking up {game}"));
            let found = lookup.lookup(game).await?;
            self.write_game(game, &found)?;
            progress.inc(1);
        }

        Ok(())
    }

    pub fn write_header(&mut self, games: &[String]) -> Result<()> {
        writeln!(self.out, "Suggested Games:")?;
        for (i, game) in games.iter().enumerate() {
            writeln!(self.out, "{}.\t{game}", i + 1)?;
        }
        Ok(())
    }

    pub fn write_game(&mut self, game: &str, found: &GameLookup) -> Result<()> {
        writeln!(self.out, "\n{}\n", "-".repeat(RULE_WIDTH))?;

        let record = &found.record;
        let fields = [
            ("BGG URL", Some(found.url.as_str())),
            ("Board Game Ranking", record.rank.as_deref()),
            ("Players", record.player_count.as_deref()),
            ("Play time", record.play_time.as_deref()),
            ("Description", record.description.as_deref()),
            ("Additional Notes", self.notes.get(game)),
        ];

        for (label, value) in fields {
            writeln!(
                self.out,
                "Game: {game}\t{label}:\t{}\n",
                value.unwrap_or(ABSENT)
            )?;
        }

        Ok(())
    }
}
