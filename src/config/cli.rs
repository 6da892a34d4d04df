use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Look up board games on BoardGameGeek and write a summary")]
pub struct Args {
    /// Names of the games to look up, reported in this order
    #[arg(required = true)]
    pub games: Vec<String>,

    /// Notes attached to games, written as "Name:Note"
    #[arg(short = 'a', long = "additional_notes", num_args = 0..)]
    pub additional_notes: Vec<String>,

    /// File to write the report to (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Request timeout in seconds; requests wait indefinitely when unset
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, env = "BGG_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}
