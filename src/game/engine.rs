use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::{debug, info};

use super::{
    action::InputEvent,
    config::{GameConfig, LevelConfig},
    error::ConfigError,
    state::{CollisionCause, GameState, Phase},
};

/// Result of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The game was not running; nothing changed
    Idle,
    /// The snake moved without incident
    Continue,
    /// The snake ate the apple and grew
    Ate,
    /// The round ended. `ate` is set when an apple was eaten on the same tick.
    GameOver { cause: CollisionCause, ate: bool },
}

/// State change caused by a single input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Event had no effect in the current phase
    None,
    Turned,
    Paused,
    Resumed,
    /// A fresh round replaced the finished one
    Restarted,
    Quit,
}

/// The game engine that handles all game logic
pub struct GameEngine<R = StdRng> {
    config: GameConfig,
    level: LevelConfig,
    rng: R,
}

impl GameEngine<StdRng> {
    /// Engine seeded from OS entropy
    pub fn from_entropy(config: GameConfig, level: LevelConfig) -> Result<Self, ConfigError> {
        Self::new(config, level, StdRng::from_entropy())
    }
}

impl<R: Rng> GameEngine<R> {
    /// Create a new game engine, rejecting unusable configurations
    pub fn new(config: GameConfig, level: LevelConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        level.validate()?;
        Ok(Self { config, level, rng })
    }

    pub fn level(&self) -> &LevelConfig {
        &self.level
    }

    /// Start a new round with the default snake and apple
    pub fn reset(&mut self) -> GameState {
        info!(level = self.level.label(), "round started");
        GameState::new(self.config.clone(), self.level.clone())
    }

    /// Apply one input event to the state machine
    pub fn handle_input(&mut self, state: &mut GameState, event: InputEvent) -> Transition {
        match (state.phase, event) {
            (Phase::Stopped, _) => Transition::None,
            (_, InputEvent::Quit) => {
                state.phase = Phase::Stopped;
                Transition::Quit
            }
            (Phase::Running, InputEvent::Turn(direction)) => {
                if state.snake.turn(direction) {
                    Transition::Turned
                } else {
                    Transition::None
                }
            }
            (Phase::Running, InputEvent::Pause) if self.level.pausable => {
                state.phase = Phase::Paused;
                Transition::Paused
            }
            (Phase::Paused, InputEvent::Pause | InputEvent::Restart) => {
                state.phase = Phase::Running;
                Transition::Resumed
            }
            // On pausable levels the pause toggle also starts the next round
            (Phase::GameOver(_), InputEvent::Restart | InputEvent::Pause)
                if event == InputEvent::Restart || self.level.pausable =>
            {
                *state = self.reset();
                Transition::Restarted
            }
            _ => Transition::None,
        }
    }

    /// Execute one tick of the game
    pub fn tick(&mut self, state: &mut GameState) -> TickOutcome {
        if !state.is_running() {
            return TickOutcome::Idle;
        }

        let cell_size = self.config.cell_size();
        state.snake.advance(cell_size);
        state.steps += 1;

        // Any segment may land on the apple, not only the head
        let apple = state.apple.position;
        let ate = state
            .snake
            .body
            .iter()
            .any(|segment| segment.overlaps(apple, cell_size));
        if ate {
            state.snake.grow(self.level.growth);
            state.apple.relocate(&mut self.rng, &self.config.board);
            state.apples_eaten += 1;
            debug!(
                length = state.snake.len(),
                apple_x = state.apple.position.x,
                apple_y = state.apple.position.y,
                "apple eaten"
            );
        }

        if let Some(cause) = self.check_collision(state) {
            state.phase = Phase::GameOver(cause);
            info!(score = state.score(), ?cause, steps = state.steps, "game over");
            return TickOutcome::GameOver { cause, ate };
        }

        if ate {
            TickOutcome::Ate
        } else {
            TickOutcome::Continue
        }
    }

    /// Self collision is checked before the wall
    fn check_collision(&self, state: &GameState) -> Option<CollisionCause> {
        if state.snake.self_collision() {
            return Some(CollisionCause::SelfCollision);
        }

        if !state.is_in_bounds(state.snake.head()) {
            return Some(CollisionCause::Wall);
        }

        None
    }
}
