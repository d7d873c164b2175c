//! Whole-model audits of the puzzle.
//!
//! Each invariant scans every stool or the entire move log. Moves only run
//! the constant-time postconditions in [`contracts`](crate::contracts); these
//! audits run once at the end of a tour in debug builds, and from tests.

use tracing::warn;

/// A rule every reachable puzzle state obeys.
pub trait Invariant<S> {
    /// Returns false if `state` breaks the rule.
    fn holds(state: &S) -> bool;

    /// The rule in one sentence, used in logs and error messages.
    fn description() -> &'static str;
}

/// A rule that an audited state broke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// The broken rule, as given by [`Invariant::description`].
    pub description: String,
}

impl InvariantViolation {
    /// Records that the rule `description` was broken.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Several invariants audited in one pass, written as a tuple.
pub trait InvariantSet<S> {
    /// Audits `state` against every rule in the set and collects each one
    /// it breaks.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check_one<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        warn!(invariant = I::description(), "Invariant violated");
        violations.push(InvariantViolation::new(I::description()));
    }
}

impl<S, I1> InvariantSet<S> for (I1,)
where
    I1: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod history_bounds;
pub mod non_increasing;

pub use history_bounds::HistoryWithinBoundsInvariant;
pub use non_increasing::NonIncreasingStacksInvariant;

/// The stacking rule plus the log bounds.
pub type PuzzleInvariants = (NonIncreasingStacksInvariant, HistoryWithinBoundsInvariant);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cheese, PuzzleState};

    #[test]
    fn test_invariant_set_holds_for_fresh_model() {
        let mut model = PuzzleState::new(4).unwrap();
        model.fill_first_peg(5).unwrap();
        assert!(PuzzleInvariants::check_all(&model).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut model = PuzzleState::new(3).unwrap();
        model.fill_first_peg(3).unwrap();
        model.move_cheese(0, 2).unwrap();
        model.move_cheese(0, 1).unwrap();
        model.move_cheese(2, 1).unwrap();
        assert!(PuzzleInvariants::check_all(&model).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut model = PuzzleState::new(3).unwrap();
        model.fill_first_peg(2).unwrap();
        model.pegs[1].push(Cheese::try_from(1).unwrap());
        model.pegs[1].push(Cheese::try_from(4).unwrap());
        model.history.add_move(7, 7);

        let violations = PuzzleInvariants::check_all(&model).unwrap_err();
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_single_invariant_as_set() {
        let model = PuzzleState::new(3).unwrap();
        assert!(<(NonIncreasingStacksInvariant,)>::check_all(&model).is_ok());
    }
}
