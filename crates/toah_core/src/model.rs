//! Stool-and-cheese model for the Tour of Anne Hoy.
//!
//! The model owns one stack of cheese per stool and a log of every move
//! that has been applied. All mutation goes through [`PuzzleState::add`]
//! and [`PuzzleState::move_cheese`], both of which refuse to put a cheese
//! on a smaller one.

use super::action::{IllegalMove, Move};
use super::contracts::{Contract, FitsOnTop, MoveContract};
use super::invariants::{InvariantSet, PuzzleInvariants};
use super::{Cheese, MoveSequence};
use std::num::NonZeroU32;
use tracing::{debug, error, instrument};

/// Errors building or rebuilding a model.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ModelError {
    /// A model needs at least one stool.
    #[display("A model needs at least one stool")]
    NoPegs,

    /// Filling the first stool failed.
    #[display("Could not fill the first stool: {}", _0)]
    Setup(IllegalMove),

    /// A recorded move was rejected during replay.
    #[display("Move {} of the sequence is illegal: {}", step, cause)]
    Replay {
        /// Zero-based position of the rejected move.
        step: usize,
        /// Why the move was rejected.
        cause: IllegalMove,
    },
}

impl std::error::Error for ModelError {}

/// A game of Tour of Anne Hoy.
///
/// Stools are stacks of cheese indexed from 0, stored bottom first.
/// Two models are equal when every stool holds the same cheeses in the
/// same order; move history is not compared.
#[derive(Debug, Clone)]
pub struct PuzzleState {
    pub(crate) pegs: Vec<Vec<Cheese>>,
    pub(crate) history: MoveSequence,
}

impl PuzzleState {
    /// Creates a model with `peg_count` empty stools.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::NoPegs` if `peg_count` is zero.
    #[instrument]
    pub fn new(peg_count: usize) -> Result<Self, ModelError> {
        if peg_count == 0 {
            return Err(ModelError::NoPegs);
        }
        Ok(Self {
            pegs: vec![Vec::new(); peg_count],
            history: MoveSequence::new(),
        })
    }

    /// Stacks cheeses of sizes `n`, `n - 1`, ..., `1` on the first stool,
    /// largest at the bottom.
    ///
    /// Meant for a fresh model; the cheeses go through [`add`](Self::add)
    /// like any other placement.
    #[instrument(skip(self))]
    pub fn fill_first_peg(&mut self, n: u32) -> Result<(), IllegalMove> {
        for size in (1..=n).rev().filter_map(NonZeroU32::new) {
            self.add(Cheese::new(size), 0)?;
        }
        debug!(cheeses = self.cheese_count(), "First stool filled");
        Ok(())
    }

    /// Places `cheese` on top of stool `peg`.
    ///
    /// Does not record a move.
    ///
    /// # Errors
    ///
    /// Returns `IllegalMove::OntoSmaller` if the stool's top cheese is
    /// smaller than `cheese`, or `IllegalMove::NoSuchPeg` for a bad index.
    #[instrument(level = "trace", skip(self))]
    pub fn add(&mut self, cheese: Cheese, peg: usize) -> Result<(), IllegalMove> {
        FitsOnTop::check(&cheese, peg, self)?;
        self.pegs[peg].push(cheese);
        Ok(())
    }

    /// Moves the top cheese of stool `from` onto stool `to` and logs it.
    ///
    /// Either the move happens and is recorded, or nothing changes. If a
    /// postcondition fails after the move was applied, the move is rolled
    /// back before the error is returned.
    ///
    /// # Errors
    ///
    /// Returns `IllegalMove` if either stool is missing, `from` is empty,
    /// `from == to`, or the cheese would land on a smaller one.
    #[instrument(level = "trace", skip(self))]
    pub fn move_cheese(&mut self, from: usize, to: usize) -> Result<(), IllegalMove> {
        let action = Move::new(from, to);
        MoveContract::pre(self, &action)?;

        let cheese = self.pegs[from]
            .pop()
            .ok_or(IllegalMove::EmptySource { peg: from })?;
        self.pegs[to].push(cheese);
        self.history.add_move(from, to);

        if let Err(violation) = MoveContract::post(self, &action) {
            error!(error = %violation, "Move broke a postcondition, rolling back");
            self.revert(action);
            return Err(violation);
        }
        Ok(())
    }

    /// Undoes `action`, which must be the last move applied.
    fn revert(&mut self, action: Move) {
        if self.history.last() == Some(action) {
            self.history.pop_move();
        }
        if let Some(cheese) = self.pegs[action.to].pop() {
            self.pegs[action.from].push(cheese);
        }
    }

    /// Audits the whole model against [`PuzzleInvariants`].
    ///
    /// Walks every stool and every logged move, so it is meant for tests
    /// and for one check at the end of a tour rather than after each move.
    ///
    /// # Errors
    ///
    /// Returns `IllegalMove::InvariantViolation` listing every invariant
    /// that does not hold.
    pub fn check_invariants(&self) -> Result<(), IllegalMove> {
        PuzzleInvariants::check_all(self).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            IllegalMove::InvariantViolation(format!("Invariants broken: {}", descriptions))
        })
    }

    /// Returns the top cheese of stool `peg`, or `None` if it is empty or
    /// does not exist.
    pub fn top_cheese(&self, peg: usize) -> Option<Cheese> {
        self.pegs.get(peg).and_then(|stack| stack.last()).copied()
    }

    /// Returns the cheese at `height` (0 is the bottom) on stool `peg`.
    pub fn cheese_at(&self, peg: usize, height: usize) -> Option<Cheese> {
        self.pegs.get(peg).and_then(|stack| stack.get(height)).copied()
    }

    /// Returns the index of the stool holding a cheese of the same size.
    pub fn cheese_location(&self, cheese: Cheese) -> Option<usize> {
        self.pegs.iter().position(|stack| stack.contains(&cheese))
    }

    /// Returns the cheeses on stool `peg`, bottom first.
    pub fn peg(&self, peg: usize) -> Option<&[Cheese]> {
        self.pegs.get(peg).map(Vec::as_slice)
    }

    /// Returns every stool, bottom first.
    pub fn pegs(&self) -> &[Vec<Cheese>] {
        &self.pegs
    }

    /// Returns the total number of cheeses on all stools.
    pub fn cheese_count(&self) -> usize {
        self.pegs.iter().map(Vec::len).sum()
    }

    /// Returns the number of stools.
    pub fn peg_count(&self) -> usize {
        self.pegs.len()
    }

    /// Returns the number of moves made so far.
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Returns the log of moves made so far.
    pub fn move_sequence(&self) -> &MoveSequence {
        &self.history
    }

    /// Returns true if every cheese sits on the last stool.
    pub fn is_solved(&self) -> bool {
        self.pegs
            .split_last()
            .is_some_and(|(_, others)| others.iter().all(Vec::is_empty))
    }
}

impl PartialEq for PuzzleState {
    fn eq(&self, other: &Self) -> bool {
        self.pegs == other.pegs
    }
}

impl Eq for PuzzleState {}
