//! GameStation console entry point.

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use gamestation::console::{select_game, select_mode, select_start};
use gamestation::{Console, GameManager, GameStatus, SessionConfig, StartChoice, StdConsole};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut console = StdConsole::new();

    let interactive = cli.game.is_none();
    let game = match cli.game {
        Some(game) => game,
        None => select_game(&mut console)?,
    };
    let mode = match cli.mode {
        Some(mode) => mode,
        None => select_mode(&mut console)?,
    };

    let mut config = SessionConfig::new(game)
        .with_mode(mode)
        .with_max_random_attempts(cli.max_random_attempts);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    info!(?config, "starting session");

    let start = match cli.load {
        Some(path) => StartChoice::Load(path),
        None if interactive => select_start(&mut console)?,
        None => StartChoice::New,
    };

    let mut manager = GameManager::from_config(&config, console)?;

    if let StartChoice::Load(path) = start {
        if let Err(err) = manager.load_game(&path) {
            warn!(%err, path = %path.display(), "starting a new game instead");
            manager
                .console_mut()
                .write_line(&format!("Could not load game: {err}. Starting a new game."))?;
        }
    }

    let status = manager.start_game()?;
    info!(?status, "session over");

    if status == GameStatus::Abandoned {
        manager.console_mut().write_line("Goodbye!")?;
    }

    Ok(())
}
