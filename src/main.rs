//! Terminal minesweeper runner (default binary).
//!
//! Reads raw bytes from stdin and draws through the crossterm renderer. Board
//! size and mine count come from the command line.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tui_minesweeper::core::{Game, GameConfig, Session};
use tui_minesweeper::input::{Decoder, PushbackReader};
use tui_minesweeper::term::{ends_session, InterruptGuard, TerminalRenderer};
use tui_minesweeper::types::{default_mine_count, DEFAULT_HEIGHT, DEFAULT_WIDTH};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Board width in cells
    #[arg(default_value_t = DEFAULT_WIDTH)]
    width: u16,

    /// Board height in cells
    #[arg(default_value_t = DEFAULT_HEIGHT)]
    height: u16,

    /// Number of mines (defaults to about 12% of the board)
    mines: Option<usize>,

    /// Seed for a reproducible sequence of minefields
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (filtered by RUST_LOG)
    #[arg(long, env = "MSWEEP_LOG")]
    log_file: Option<PathBuf>,
}

impl Args {
    fn game_config(&self) -> Result<GameConfig> {
        let mines = self
            .mines
            .unwrap_or_else(|| default_mine_count(self.width, self.height));
        GameConfig::new(self.width, self.height, mines).context("invalid board configuration")
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = args.game_config()?;

    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }
    info!(
        width = config.width(),
        height = config.height(),
        mines = config.mines(),
        "starting"
    );

    let game = match args.seed {
        Some(seed) => Game::with_seed(config, seed),
        None => Game::new(config),
    };

    let mut term = TerminalRenderer::new();
    term.enter().context("failed to set up the terminal")?;

    let result = run(game, &mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(game: Game, term: &mut TerminalRenderer) -> Result<()> {
    let source = InterruptGuard::new(Decoder::new(PushbackReader::new(io::stdin().lock())));
    let mut session = Session::new(game, source, term);
    match session.run() {
        Ok(()) => Ok(()),
        // Ctrl-C or closed stdin ends the session like a confirmed quit.
        Err(err) if ends_session(&err) => {
            info!(reason = %err, "session ended");
            Ok(())
        }
        Err(err) => Err(anyhow::Error::from(err).context("terminal session failed")),
    }
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow!("failed to install log subscriber: {err}"))
}
