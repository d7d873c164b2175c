//! Tour of Anne Hoy puzzle logic.
//!
//! A multi-stool Tower of Hanoi with cheese instead of discs. This crate
//! holds the model and the solvers and does no I/O.
//!
//! # Architecture
//!
//! - **Model**: [`PuzzleState`] keeps one stack of [`Cheese`] per stool and
//!   a [`MoveSequence`] of every accepted move
//! - **Contracts**: move preconditions and the stacking invariant, checked
//!   on every mutation
//! - **Solver**: the Frame-Stewart four-stool tour, driven by a memoised
//!   [`SplitTable`]
//!
//! # Example
//!
//! ```
//! use toah_core::{PuzzleState, solve_four_peg_tour};
//!
//! let mut model = PuzzleState::new(4)?;
//! model.fill_first_peg(3)?;
//! solve_four_peg_tour(&mut model)?;
//! assert_eq!(model.move_count(), 5);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod cheese;
pub mod contracts;
pub mod invariants;
mod model;
mod render;
mod sequence;
mod solver;

pub use action::{IllegalMove, Move};
pub use cheese::{Cheese, ZeroSizedCheese};
pub use model::{ModelError, PuzzleState};
pub use render::render;
pub use sequence::MoveSequence;
pub use solver::{
    PegRoles, Split, SplitTable, ThreePegRoles, TourError, TourSolver, cost3, min_moves,
    optimal_split, solve_four_peg_tour, solve_three_peg_tour,
};
