//! Anne Hoy - console front end for the Tour of Anne Hoy puzzle
//!
//! The puzzle model and solvers live in `toah_core`; this crate adds the
//! pieces that talk to a person.
//!
//! # Architecture
//!
//! - **Console**: line-based play loop over any reader and writer
//! - **Animation**: step-by-step replay of a solved tour
//! - **Config**: TOML settings shared by the commands
//!
//! # Example
//!
//! ```no_run
//! use anne_hoy::ConsoleController;
//!
//! # fn example() -> anyhow::Result<()> {
//! let stdin = std::io::stdin();
//! let controller = ConsoleController::new(5, 4, stdin.lock(), std::io::stdout())?;
//! let model = controller.play_loop()?;
//! println!("{} moves", model.move_count());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod animate;
mod config;
mod console;

// Crate-level exports - Animation
pub use animate::{AnimateError, animate};

// Crate-level exports - Configuration
pub use config::{ConfigError, TourConfig};

// Crate-level exports - Console
pub use console::{
    ConsoleController, INSTRUCTIONS, Keyword, PROMPT, ParseCommandError, PlayerCommand, Stool,
};
