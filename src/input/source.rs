use std::collections::VecDeque;

use anyhow::{Context, Result};
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::{FutureExt, StreamExt};

use super::handler::InputHandler;
use crate::game::InputEvent;

/// Something the loop can drain for player input once per iteration
pub trait InputSource {
    /// Return every event queued since the last call, without waiting
    fn poll(&mut self) -> Result<Vec<InputEvent>>;
}

/// Keyboard input from the controlling terminal
pub struct TerminalInput {
    events: EventStream,
    handler: InputHandler,
}

impl TerminalInput {
    pub fn new() -> Self {
        Self {
            events: EventStream::new(),
            handler: InputHandler::new(),
        }
    }

    fn translate(&self, event: Event) -> Option<InputEvent> {
        match event {
            // Only process key press events, not release
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                self.handler.handle_key_event(key)
            }
            _ => None,
        }
    }
}

impl Default for TerminalInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for TerminalInput {
    fn poll(&mut self) -> Result<Vec<InputEvent>> {
        let mut drained = Vec::new();
        // `now_or_never` yields None once nothing more is ready
        while let Some(next) = self.events.next().now_or_never() {
            let Some(event) = next else {
                break;
            };
            let event = event.context("Failed to read terminal event")?;
            drained.extend(self.translate(event));
        }
        Ok(drained)
    }
}

/// Replays a fixed script, one batch per poll. Used to drive the loop headless.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    batches: VecDeque<Vec<InputEvent>>,
}

impl ScriptedInput {
    pub fn new<I>(batches: I) -> Self
    where
        I: IntoIterator<Item = Vec<InputEvent>>,
    {
        Self {
            batches: batches.into_iter().collect(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> Result<Vec<InputEvent>> {
        Ok(self.batches.pop_front().unwrap_or_default())
    }
}
