use crate::config::Config;
use crate::error::{GameError, Result};
use crate::services::game_service::GameService;
use tracing::{info, Level};

mod config;
mod domain;
mod error;
mod infrastructure;
mod services;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(exit_code(&err));
    }
}

async fn run() -> Result<()> {
    let config = Config::new()?;
    init_tracing(&config.args.log_level)?;

    GameService::from_config(config)?.run().await?;

    info!("Lookup completed successfully!");
    Ok(())
}

/// A game with no search result aborts the batch with 2; anything else is 1.
fn exit_code(err: &GameError) -> i32 {
    match err {
        GameError::NoSearchResult(_) => 2,
        _ => 1,
    }
}

fn init_tracing(log_level: &str) -> Result<()> {
    let level: Level = log_level
        .parse()
        .map_err(|_| GameError::Other(format!("Invalid log level: {log_level}")))?;

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}
