use super::parse_selector;
use crate::domain::GameRecord;
use crate::error::Result;
use scraper::{Html, Selector};

const RANK_LABEL: &str = "Board Game Rank:";

struct Selectors {
    players: Selector,
    playtime: Selector,
    block: Selector,
    cell: Selector,
    rank_marker: Selector,
    description: Selector,
}

/// Pulls player count, play time, rank and description out of a game page.
pub struct GamePageScraper {
    selectors: Selectors,
}

impl GamePageScraper {
    pub fn new() -> Result<Self> {
        let selectors = Selectors {
            players: parse_selector("#edit_players")?,
            playtime: parse_selector("#edit_playtime")?,
            block: parse_selector("div")?,
            cell: parse_selector("td")?,
            rank_marker: parse_selector("div.mf.nw.b")?,
            description: parse_selector(r#"meta[name="description"]"#)?,
        };

        Ok(Self { selectors })
    }

    pub fn extract(&self, html: &str) -> GameRecord {
        let document = Html::parse_document(html);

        GameRecord {
            player_count: self.leading_number_block(&document, &self.selectors.players),
            play_time: self.leading_number_block(&document, &self.selectors.playtime),
            rank: self.rank(&document),
            description: self.description(&document),
        }
    }

    /// Trimmed text of the first `div` under `container` that starts with a digit.
    fn leading_number_block(&self, document: &Html, container: &Selector) -> Option<String> {
        let container = document.select(container).next()?;

        container
            .select(&self.selectors.block)
            .map(|block| block.text().collect::<String>().trim().to_string())
            .find(|text| text.starts_with(|c: char| c.is_ascii_digit()))
    }

    fn rank(&self, document: &Html) -> Option<String> {
        for cell in document.select(&self.selectors.cell) {
            for marker in cell.select(&self.selectors.rank_marker) {
                let text = marker.text().collect::<String>();
                let text = text.trim();
                if !text.contains(RANK_LABEL) {
                    continue;
                }
                if let Some(rank) = text
                    .split_whitespace()
                    .find(|token| token.chars().all(|c| c.is_ascii_digit()))
                {
                    return Some(rank.to_string());
                }
            }
        }

        None
    }

    /// Meta description with markup stripped and anything outside ASCII dropped.
    fn description(&self, document: &Html) -> Option<String> {
        let content = document
            .select(&self.selectors.description)
            .find_map(|meta| meta.value().attr("content"))?;

        let text = Html::parse_fragment(content)
            .root_element()
            .text()
            .collect::<String>();

        Some(text.chars().filter(char::is_ascii).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATAN_PAGE: &str = r#"
        <html>
          <head>
            <meta property="og:title" content="Catan">
            <meta name="description" content="Trade, build and settle...">
          </head>
          <body>
            <div id="edit_players">
              <div class="label">Players</div>
              <div>3–4</div>
              <div>5 with expansion</div>
            </div>
            <div id="edit_playtime">
              <div class="label">Playing Time</div>
              <div>
                60
              </div>
            </div>
            <table><tr>
              <td><div class="mf nw b">Overall Rank</div></td>
              <td><div class="mf nw b">Board Game Rank: 429</div></td>
            </tr></table>
          </body>
        </html>
    "#;

    fn scraper() -> GamePageScraper {
        GamePageScraper::new().unwrap()
    }

    #[test]
    fn extracts_all_fields() {
        let record = scraper().extract(CATAN_PAGE);

        assert_eq!(
            record,
            GameRecord {
                player_count: Some("3–4".to_string()),
                play_time: Some("60".to_string()),
                rank: Some("429".to_string()),
                description: Some("Trade, build and settle...".to_string()),
            }
        );
    }

    #[test]
    fn empty_page_gives_absent_fields() {
        let record = scraper().extract("<html><body></body></html>");
        assert_eq!(record, GameRecord::default());
    }

    #[test]
    fn missing_fields_do_not_affect_others() {
        let html = r#"
            <html><body>
              <div id="edit_players"><div>Players</div><div>unknown</div></div>
              <table><tr><td><div class="mf nw b">Board Game Rank: 17</div></td></tr></table>
            </body></html>
        "#;
        let record = scraper().extract(html);

        assert_eq!(record.player_count, None);
        assert_eq!(record.play_time, None);
        assert_eq!(record.rank.as_deref(), Some("17"));
        assert_eq!(record.description, None);
    }

    #[test]
    fn rank_skips_non_numeric_tokens() {
        let html = r#"
            <html><body><table><tr>
              <td><div class="mf nw b">Strategy Rank: 12</div></td>
              <td><div class="mf nw b">Board Game Rank: N/A</div></td>
              <td><div class="other">Board Game Rank: 5</div></td>
              <td><div class="mf nw b">  Board Game Rank: #3 overall 88 </div></td>
            </tr></table></body></html>
        "#;

        assert_eq!(scraper().rank(&Html::parse_document(html)).as_deref(), Some("88"));
    }

    #[test]
    fn rank_marker_matches_classes_in_any_order() {
        let html = r#"
            <html><body><table><tr>
              <td><div class="mf b">Board Game Rank: 1</div></td>
              <td><div class="b nw mf highlight">Board Game Rank: 42</div></td>
            </tr></table></body></html>
        "#;

        assert_eq!(scraper().rank(&Html::parse_document(html)).as_deref(), Some("42"));
    }

    #[test]
    fn description_strips_markup_and_non_ascii() {
        let html = r#"
            <html><head>
              <meta name="keywords" content="ignored">
              <meta name="description" content="Caf&eacute; &lt;b&gt;racing&lt;/b&gt; game – fast">
            </head><body></body></html>
        "#;

        assert_eq!(
            scraper().description(&Html::parse_document(html)).as_deref(),
            Some("Caf racing game  fast")
        );
    }
}
