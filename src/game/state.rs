use rand::Rng;

use super::{
    action::Direction,
    config::{GameConfig, LevelConfig},
    grid::{Board, Position},
};

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Position>,
    /// Direction of the last move
    pub direction: Direction,
    /// Heading requested since the last move, applied by the next advance
    pub pending: Option<Direction>,
}

impl Snake {
    /// Create a snake whose segments are all stacked on `head`
    pub fn new(head: Position, direction: Direction, length: usize) -> Self {
        Self::from_body(vec![head; length.max(1)], direction)
    }

    /// Snake with an explicit body, head first
    pub fn from_body(body: Vec<Position>, direction: Direction) -> Self {
        Self {
            body,
            direction,
            pending: None,
        }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Queue a heading for the next advance, unless it reverses the last
    /// move. Several turns between moves: the last accepted one wins.
    /// Returns whether the intent was accepted.
    pub fn turn(&mut self, intent: Direction) -> bool {
        if self.direction.is_opposite(intent) {
            return false;
        }
        self.pending = Some(intent);
        true
    }

    /// Heading the next advance will use
    pub fn heading(&self) -> Direction {
        self.pending.unwrap_or(self.direction)
    }

    /// Shift every segment onto its predecessor's old cell, then step the
    /// head one cell. Leaving the board is allowed here.
    pub fn advance(&mut self, cell_size: i32) {
        if let Some(direction) = self.pending.take() {
            self.direction = direction;
        }
        for i in (1..self.body.len()).rev() {
            self.body[i] = self.body[i - 1];
        }
        self.body[0] = self.body[0].stepped(self.direction, cell_size);
    }

    /// Append `n` segments at the sentinel; they join the trail on the next advance
    pub fn grow(&mut self, n: usize) {
        self.body
            .extend(std::iter::repeat(Position::SENTINEL).take(n));
    }

    /// Head sits on a segment at index 2 or later
    pub fn self_collision(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(2).any(|&segment| segment == head)
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// The single apple on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Apple {
    pub position: Position,
}

impl Apple {
    pub fn new(position: Position) -> Self {
        Self { position }
    }

    /// Jump to a uniformly random interior cell. The snake's body is not avoided.
    pub fn relocate<R: Rng>(&mut self, rng: &mut R, board: &Board) {
        let col = rng.gen_range(board.interior_columns.clone());
        let row = rng.gen_range(board.interior_rows.clone());
        self.position = Position::from_cell(col, row, board.cell_size);
    }
}

/// What ended a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionCause {
    /// Snake left the board
    Wall,
    /// Snake hit itself
    SelfCollision,
}

/// Lifecycle of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    Paused,
    GameOver(CollisionCause),
    /// Quit requested; terminal
    Stopped,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub apple: Apple,
    pub phase: Phase,
    pub config: GameConfig,
    pub level: LevelConfig,
    /// Apples eaten this round
    pub apples_eaten: u32,
    /// Ticks simulated this round
    pub steps: u32,
}

impl GameState {
    /// Fresh round: default snake and apple spawn
    pub fn new(config: GameConfig, level: LevelConfig) -> Self {
        Self {
            snake: Snake::new(
                config.snake_spawn,
                config.snake_direction,
                config.initial_snake_length,
            ),
            apple: Apple::new(config.apple_spawn),
            phase: Phase::Running,
            config,
            level,
            apples_eaten: 0,
            steps: 0,
        }
    }

    /// Segments gained since the round started
    pub fn score(&self) -> usize {
        self.snake
            .len()
            .saturating_sub(self.config.initial_snake_length)
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver(_))
    }

    /// Check if a position is within the board bounds
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        self.config.board.contains(pos)
    }
}
