//! Gomoku GUI
//!
//! Two players share one board; every position of the game can be revisited
//! from the move list.

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use gomoku::ui::GomokuApp;
use gomoku::{GameConfig, GameState};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line options; flags override the config file
#[derive(Parser, Debug)]
#[command(name = "gomoku", version, about = "Two-player Gomoku with time travel")]
struct Cli {
    /// Board dimension N (the board is N x N)
    #[arg(short, long)]
    size: Option<usize>,

    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => GameConfig::default(),
        };
        if let Some(size) = self.size {
            config.board_size = size;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.game_config()?;
    let state = GameState::from_config(&config)?;
    info!(board_size = config.board_size, "starting gomoku");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Gomoku"),
        ..Default::default()
    };

    eframe::run_native(
        "Gomoku",
        options,
        Box::new(|cc| Ok(Box::new(GomokuApp::new(cc, state)))),
    )
    .map_err(|err| anyhow!("window closed with error: {err}"))
}
