//! Line-based console for playing the puzzle by hand.

mod command;
mod controller;

pub use command::{Keyword, ParseCommandError, PlayerCommand, Stool};
pub use controller::{ConsoleController, INSTRUCTIONS, PROMPT};
