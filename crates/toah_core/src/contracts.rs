//! Contract-based validation for moves.
//!
//! Preconditions decide whether a move may be applied. Postconditions
//! look only at what the move touched: the new log entry and the
//! destination's top two cheeses. Whole-model audits live in
//! [`invariants`](crate::invariants).

use super::action::{IllegalMove, Move};
use super::{Cheese, PuzzleState};
use tracing::instrument;

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), IllegalMove>;

    /// Checks postconditions after applying the action.
    fn post(after: &S, action: &A) -> Result<(), IllegalMove>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the stool index exists in the model.
pub struct PegExists;

impl PegExists {
    /// Fails with `IllegalMove::NoSuchPeg` for an index past the last stool.
    pub fn check(peg: usize, model: &PuzzleState) -> Result<(), IllegalMove> {
        if peg < model.peg_count() {
            Ok(())
        } else {
            Err(IllegalMove::NoSuchPeg {
                peg,
                peg_count: model.peg_count(),
            })
        }
    }
}

/// Precondition: the source stool holds at least one cheese.
pub struct SourceOccupied;

impl SourceOccupied {
    /// Returns the cheese that would be moved, or fails with
    /// `IllegalMove::EmptySource` when the source is bare.
    pub fn check(mov: &Move, model: &PuzzleState) -> Result<Cheese, IllegalMove> {
        model
            .top_cheese(mov.from)
            .ok_or(IllegalMove::EmptySource { peg: mov.from })
    }
}

/// Precondition: source and destination differ.
pub struct DistinctPegs;

impl DistinctPegs {
    /// Fails with `IllegalMove::SamePeg` when both ends name one stool.
    pub fn check(mov: &Move) -> Result<(), IllegalMove> {
        if mov.from == mov.to {
            Err(IllegalMove::SamePeg { peg: mov.from })
        } else {
            Ok(())
        }
    }
}

/// Precondition: a cheese may be placed on a stool.
///
/// This is the single stacking gate: both direct placement and moves go
/// through it.
pub struct FitsOnTop;

impl FitsOnTop {
    /// Fails with `IllegalMove::OntoSmaller` if the stool's top cheese is
    /// strictly smaller than `cheese`.
    pub fn check(cheese: &Cheese, peg: usize, model: &PuzzleState) -> Result<(), IllegalMove> {
        PegExists::check(peg, model)?;
        match model.top_cheese(peg) {
            Some(top) if !cheese.fits_on(&top) => Err(IllegalMove::OntoSmaller {
                cheese: *cheese,
                top,
                peg,
            }),
            _ => Ok(()),
        }
    }
}

/// Composite precondition: all the rules a move must satisfy, checked in
/// the order a player would notice them.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(level = "trace", skip(model))]
    pub fn check(mov: &Move, model: &PuzzleState) -> Result<(), IllegalMove> {
        PegExists::check(mov.from, model)?;
        PegExists::check(mov.to, model)?;
        let cheese = SourceOccupied::check(mov, model)?;
        DistinctPegs::check(mov)?;
        FitsOnTop::check(&cheese, mov.to, model)
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Postconditions
// ─────────────────────────────────────────────────────────────

/// Postcondition: the applied move is the newest entry in the log.
pub struct MoveLogged;

impl MoveLogged {
    /// Fails with `IllegalMove::InvariantViolation` if the log does not end
    /// with `mov`.
    pub fn check(mov: &Move, model: &PuzzleState) -> Result<(), IllegalMove> {
        if model.move_sequence().last() == Some(*mov) {
            Ok(())
        } else {
            Err(IllegalMove::InvariantViolation(format!(
                "Move {} missing from the end of the log",
                mov
            )))
        }
    }
}

/// Postcondition: the top cheese of a stool rests on one at least as large.
pub struct TopPairOrdered;

impl TopPairOrdered {
    /// Fails with `IllegalMove::InvariantViolation` if the top two cheeses
    /// of `peg` are out of order.
    pub fn check(peg: usize, model: &PuzzleState) -> Result<(), IllegalMove> {
        match model.peg(peg).unwrap_or_default() {
            [.., below, top] if !top.fits_on(below) => {
                Err(IllegalMove::InvariantViolation(format!(
                    "Stool {} holds {} on top of {}",
                    peg, top, below
                )))
            }
            _ => Ok(()),
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Both stools exist
/// - Source holds a cheese
/// - Source and destination differ
/// - The moved cheese fits on the destination
///
/// Postconditions:
/// - The move is the last logged entry
/// - The moved cheese sits on a larger or equal one
///
/// Both postconditions take constant time, so a tour of `m` moves stays
/// `O(m)` with them enabled.
pub struct MoveContract;

impl Contract<PuzzleState, Move> for MoveContract {
    fn pre(model: &PuzzleState, action: &Move) -> Result<(), IllegalMove> {
        LegalMove::check(action, model)
    }

    fn post(after: &PuzzleState, action: &Move) -> Result<(), IllegalMove> {
        MoveLogged::check(action, after)?;
        TopPairOrdered::check(action.to, after)
    }
}
