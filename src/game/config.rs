use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::{
    action::Direction,
    error::ConfigError,
    grid::{Board, Position},
};

/// Configuration shared by every level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board geometry
    pub board: Board,
    /// Initial length of the snake
    pub initial_snake_length: usize,
    /// Where the snake's head starts
    pub snake_spawn: Position,
    /// Heading of a fresh snake
    pub snake_direction: Direction,
    /// Where the apple sits at the start of each round
    pub apple_spawn: Position,
}

impl Default for GameConfig {
    fn default() -> Self {
        let board = Board::default();
        let cell = board.cell_size;
        Self {
            board,
            initial_snake_length: 1,
            snake_spawn: Position::new(cell, cell),
            snake_direction: Direction::Down,
            apple_spawn: Position::new(cell * 3, cell * 3),
        }
    }
}

impl GameConfig {
    pub fn cell_size(&self) -> i32 {
        self.board.cell_size
    }

    /// Check the geometry is usable before a game is built on it
    pub fn validate(&self) -> Result<(), ConfigError> {
        let board = &self.board;
        if board.cell_size <= 0 {
            return Err(ConfigError::NonPositiveCellSize(board.cell_size));
        }
        if board.width < board.cell_size || board.height < board.cell_size {
            return Err(ConfigError::BoardTooSmall {
                width: board.width,
                height: board.height,
                cell_size: board.cell_size,
            });
        }
        if self.initial_snake_length == 0 {
            return Err(ConfigError::ZeroInitialLength);
        }
        if board.interior_columns.is_empty() || board.interior_rows.is_empty() {
            return Err(ConfigError::EmptyInterior);
        }

        let (col, row) = (*board.interior_columns.end(), *board.interior_rows.end());
        let far = Position::from_cell(col, row, board.cell_size);
        let near = Position::from_cell(
            *board.interior_columns.start(),
            *board.interior_rows.start(),
            board.cell_size,
        );
        if !board.contains(far) {
            return Err(ConfigError::InteriorOutsideBoard { col, row });
        }
        if !board.contains(near) {
            return Err(ConfigError::InteriorOutsideBoard {
                col: *board.interior_columns.start(),
                row: *board.interior_rows.start(),
            });
        }

        Ok(())
    }
}

/// Difficulty preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    One,
    Two,
}

impl Level {
    pub fn config(self) -> LevelConfig {
        match self {
            Level::One => LevelConfig {
                level: self,
                tick_interval: Duration::from_millis(70),
                growth: 1,
                pausable: true,
                start_delay: Duration::from_secs(2),
                rated: true,
            },
            Level::Two => LevelConfig {
                level: self,
                tick_interval: Duration::from_millis(20),
                growth: 2,
                pausable: false,
                start_delay: Duration::ZERO,
                rated: false,
            },
        }
    }
}

/// Immutable per-level tuning
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelConfig {
    pub level: Level,
    /// Delay between ticks
    pub tick_interval: Duration,
    /// Segments gained per apple
    pub growth: usize,
    /// Whether the pause toggle is honoured
    pub pausable: bool,
    /// Pause after the first frame before the first tick
    pub start_delay: Duration,
    /// Whether the game-over screen shows a score verdict
    pub rated: bool,
}

impl LevelConfig {
    pub fn label(&self) -> &'static str {
        match self.level {
            Level::One => "Level 1",
            Level::Two => "Level 2",
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.growth == 0 {
            return Err(ConfigError::ZeroGrowth);
        }
        Ok(())
    }
}

impl Default for LevelConfig {
    fn default() -> Self {
        Level::One.config()
    }
}
