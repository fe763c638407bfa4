use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::{Direction, InputEvent};

/// Maps terminal key presses onto game input
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> Option<InputEvent> {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(InputEvent::Quit);
        }

        let event = match key.code {
            // Movement - Arrow keys
            KeyCode::Up => InputEvent::Turn(Direction::Up),
            KeyCode::Down => InputEvent::Turn(Direction::Down),
            KeyCode::Left => InputEvent::Turn(Direction::Left),
            KeyCode::Right => InputEvent::Turn(Direction::Right),

            // Movement - WASD
            KeyCode::Char('w' | 'W') => InputEvent::Turn(Direction::Up),
            KeyCode::Char('s' | 'S') => InputEvent::Turn(Direction::Down),
            KeyCode::Char('a' | 'A') => InputEvent::Turn(Direction::Left),
            KeyCode::Char('d' | 'D') => InputEvent::Turn(Direction::Right),

            // Controls
            KeyCode::Char(' ') => InputEvent::Pause,
            KeyCode::Enter | KeyCode::Char('r' | 'R') => InputEvent::Restart,
            KeyCode::Esc | KeyCode::Char('q' | 'Q') => InputEvent::Quit,

            _ => return None,
        };

        Some(event)
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
