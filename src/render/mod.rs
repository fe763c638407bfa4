//! Presentation collaborator interface
//!
//! The loop hands a complete [`FrameView`] every iteration; renderers hold no game logic.

pub mod renderer;

use anyhow::Result;

use crate::game::{Board, GameState, Phase, Position, Rating};
use crate::metrics::GameMetrics;

pub use renderer::TerminalRenderer;

/// Snapshot of everything a frame shows
#[derive(Debug, Clone, PartialEq)]
pub struct FrameView<'a> {
    pub board: &'a Board,
    /// Head first; sentinel segments included as-is
    pub segments: &'a [Position],
    pub apple: Position,
    pub score: usize,
    pub level_label: &'static str,
    /// Whether the level honours the pause toggle
    pub pausable: bool,
    pub phase: Phase,
    /// Verdict for the finished round, on levels that rate it
    pub rating: Option<Rating>,
    pub high_score: usize,
    pub rounds_played: u32,
    pub elapsed: String,
}

impl<'a> FrameView<'a> {
    pub fn capture(state: &'a GameState, metrics: &GameMetrics) -> Self {
        let rating = (state.is_game_over() && state.level.rated)
            .then(|| Rating::for_score(state.score()));

        Self {
            board: &state.config.board,
            segments: &state.snake.body,
            apple: state.apple.position,
            score: state.score(),
            level_label: state.level.label(),
            pausable: state.level.pausable,
            phase: state.phase,
            rating,
            high_score: metrics.high_score,
            rounds_played: metrics.rounds_played,
            elapsed: metrics.format_time(),
        }
    }

    pub fn score_text(&self) -> String {
        format!("Score: {}", self.score)
    }

    pub fn is_paused(&self) -> bool {
        self.phase == Phase::Paused
    }
}

pub trait Renderer {
    fn draw_frame(&mut self, view: &FrameView<'_>) -> Result<()>;
}
