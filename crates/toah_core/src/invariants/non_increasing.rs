//! Stacking invariant: no cheese rests on a smaller one.

use super::super::PuzzleState;
use super::Invariant;

/// Invariant: every stool reads non-increasing from bottom to top.
pub struct NonIncreasingStacksInvariant;

impl Invariant<PuzzleState> for NonIncreasingStacksInvariant {
    fn holds(model: &PuzzleState) -> bool {
        model
            .pegs()
            .iter()
            .all(|stack| stack.windows(2).all(|pair| pair[1].fits_on(&pair[0])))
    }

    fn description() -> &'static str {
        "No cheese rests on a smaller cheese"
    }
}
