pub mod handler;
pub mod source;

pub use handler::InputHandler;
pub use source::{InputSource, ScriptedInput, TerminalInput};
