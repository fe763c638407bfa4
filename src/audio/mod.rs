//! Audio collaborator interface
//!
//! The loop calls these fire-and-forget; implementations must not block for long.

use tracing::debug;

/// Short sound effects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clip {
    /// Apple eaten
    Ding,
    /// Round lost
    Crash,
}

/// Looping background music
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Track {
    Background,
}

pub trait AudioPlayer {
    fn play_one_shot(&mut self, clip: Clip);
    fn play_loop(&mut self, track: Track);
    fn pause(&mut self);
    fn resume(&mut self);
}

/// Plays nothing; records requests in the log
#[derive(Debug, Default)]
pub struct SilentAudio;

impl AudioPlayer for SilentAudio {
    fn play_one_shot(&mut self, clip: Clip) {
        debug!(?clip, "one-shot");
    }

    fn play_loop(&mut self, track: Track) {
        debug!(?track, "loop started");
    }

    fn pause(&mut self) {
        debug!("music paused");
    }

    fn resume(&mut self) {
        debug!("music resumed");
    }
}
