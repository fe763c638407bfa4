use anyhow::{Context, Result};
use apple_snake::audio::SilentAudio;
use apple_snake::game::{GameConfig, GameEngine, Level};
use apple_snake::input::TerminalInput;
use apple_snake::modes::PlayMode;
use apple_snake::render::TerminalRenderer;
use clap::{Parser, ValueEnum};
use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::backend::CrosstermBackend;
use std::fs::File;
use std::io::{Stderr, stderr};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "apple_snake")]
#[command(version, about = "Snake game: eat apples, avoid walls and yourself")]
struct Cli {
    /// Difficulty level
    #[arg(long, default_value = "1")]
    level: LevelArg,

    /// Write logs to this file (the terminal is taken by the game)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Clone, ValueEnum)]
enum LevelArg {
    /// Slower ticks, one segment per apple, pause allowed
    #[value(name = "1")]
    One,
    /// Fast ticks, two segments per apple, no pause
    #[value(name = "2")]
    Two,
}

impl From<LevelArg> for Level {
    fn from(arg: LevelArg) -> Self {
        match arg {
            LevelArg::One => Level::One,
            LevelArg::Two => Level::Two,
        }
    }
}

fn init_logging(path: Option<&PathBuf>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

type Game = PlayMode<TerminalRenderer<CrosstermBackend<Stderr>>, SilentAudio, TerminalInput>;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_ref())?;

    let level = Level::from(cli.level).config();
    let engine = GameEngine::from_entropy(GameConfig::default(), level)
        .context("Invalid game configuration")?;

    // Setup terminal; the guard restores it on every exit path from here on
    enable_raw_mode().context("Failed to enable raw mode")?;
    let _guard = TerminalGuard;
    let mut stderr = stderr();
    execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let mut renderer = TerminalRenderer::new(CrosstermBackend::new(stderr))?;
    renderer
        .terminal_mut()
        .hide_cursor()
        .context("Failed to hide cursor")?;
    renderer
        .terminal_mut()
        .clear()
        .context("Failed to clear terminal")?;

    let mut game: Game = PlayMode::new(engine, renderer, SilentAudio, TerminalInput::new());
    game.run().await
}

/// Leaves raw mode and the alternate screen when dropped
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = disable_raw_mode() {
            tracing::error!(?err, "failed to disable raw mode");
        }
        if let Err(err) = execute!(stderr(), LeaveAlternateScreen, Show) {
            tracing::error!(?err, "failed to leave alternate screen");
        }
    }
}
