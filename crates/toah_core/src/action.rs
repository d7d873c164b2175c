//! Moves between stools and the error raised when one is not allowed.
//!
//! A move is a plain `(from, to)` pair of stool indices. Whether it is
//! legal depends on the state it is applied to, so validation lives in
//! the contracts and the state, not here.

use super::Cheese;
use serde::{Deserialize, Serialize};

/// A move of the top cheese on stool `from` to stool `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("({}, {})", from, to)]
pub struct Move {
    /// Index of the stool the cheese is taken from.
    pub from: usize,
    /// Index of the stool the cheese is placed on.
    pub to: usize,
}

impl Move {
    /// Creates a new move.
    pub fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }
}

impl From<(usize, usize)> for Move {
    fn from((from, to): (usize, usize)) -> Self {
        Self::new(from, to)
    }
}

/// A move or placement that would break the rules of the puzzle.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum IllegalMove {
    /// A cheese would rest on a strictly smaller one.
    #[display("Cannot place cheese {} on smaller cheese {} at stool {}", cheese, top, peg)]
    OntoSmaller {
        /// The cheese being placed.
        cheese: Cheese,
        /// The cheese currently on top of the stool.
        top: Cheese,
        /// The destination stool.
        peg: usize,
    },

    /// The source stool holds no cheese.
    #[display("No cheese on stool {}", peg)]
    EmptySource {
        /// The empty stool.
        peg: usize,
    },

    /// Source and destination are the same stool.
    #[display("Cannot place cheese back on the same stool {}", peg)]
    SamePeg {
        /// The stool named twice.
        peg: usize,
    },

    /// A stool index outside the model.
    #[display("Stool {} does not exist (model has {} stools)", peg, peg_count)]
    NoSuchPeg {
        /// The requested index.
        peg: usize,
        /// Number of stools in the model.
        peg_count: usize,
    },

    /// A postcondition failed after the move was applied.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for IllegalMove {}
