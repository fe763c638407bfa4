//! Apple Snake - a terminal snake game with two difficulty levels
//!
//! This library provides:
//! - Core game logic and the round state machine (game module)
//! - Collaborator interfaces for audio, input and rendering, with terminal implementations
//! - The paced game loop (modes module)

pub mod audio;
pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
