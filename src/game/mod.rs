//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! Presentation, audio and input reach it only through the types exported here.

pub mod action;
pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod rating;
pub mod state;

// Re-export commonly used types
pub use action::{Direction, InputEvent};
pub use config::{GameConfig, Level, LevelConfig};
pub use engine::{GameEngine, TickOutcome, Transition};
pub use error::ConfigError;
pub use grid::{Board, Position};
pub use rating::Rating;
pub use state::{Apple, CollisionCause, GameState, Phase, Snake};
