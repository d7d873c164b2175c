//! History invariant: every logged move names two distinct, existing stools.

use super::super::PuzzleState;
use super::Invariant;

/// Invariant: the move log only contains moves that could have been legal.
///
/// Moves are logged after validation, so a logged move never names a
/// missing stool or the same stool twice.
pub struct HistoryWithinBoundsInvariant;

impl Invariant<PuzzleState> for HistoryWithinBoundsInvariant {
    fn holds(model: &PuzzleState) -> bool {
        let peg_count = model.peg_count();
        model
            .move_sequence()
            .iter()
            .all(|mov| mov.from < peg_count && mov.to < peg_count && mov.from != mov.to)
    }

    fn description() -> &'static str {
        "Every logged move names two distinct stools of the model"
    }
}
