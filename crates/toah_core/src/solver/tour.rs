//! Recursive tours that move a whole pile from the first stool to the last.

use super::roles::{PegRoles, ThreePegRoles};
use super::split::SplitTable;
use crate::{IllegalMove, PuzzleState};
use tracing::{error, info, instrument};

/// Why a tour could not be run to completion.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum TourError {
    /// The model has fewer stools than the tour needs.
    #[display("Tour needs {} stools, model has {}", required, found)]
    TooFewPegs {
        /// Stools the tour uses.
        required: usize,
        /// Stools in the model.
        found: usize,
    },

    /// A stool other than the first already holds cheese.
    #[display("Stool {} must be empty before the tour starts", peg)]
    NotAtStart {
        /// The occupied stool.
        peg: usize,
    },

    /// The solver issued a move the model rejected.
    ///
    /// This is a defect in the role bookkeeping, never a user error.
    #[display("Solver issued an illegal move: {}", _0)]
    Bookkeeping(IllegalMove),

    /// The move count for the pile does not fit in a `u64`, so no optimal
    /// split is known.
    #[display("No optimal split for {} cheeses: move count overflows u64", cheeses)]
    SplitOverflow {
        /// Size of the pile being split.
        cheeses: usize,
    },
}

impl std::error::Error for TourError {}

/// Drives a model through the four-stool Frame-Stewart tour.
///
/// Holds the only mutable handle to the model for the length of the tour,
/// plus the split memo.
#[derive(Debug)]
pub struct TourSolver<'a> {
    model: &'a mut PuzzleState,
    splits: SplitTable,
}

impl<'a> TourSolver<'a> {
    /// Wraps a model for solving.
    pub fn new(model: &'a mut PuzzleState) -> Self {
        Self {
            model,
            splits: SplitTable::new(),
        }
    }

    /// Moves the top `n` cheeses from `roles.source` to `roles.destination`
    /// using three stools.
    #[instrument(level = "trace", skip(self))]
    pub fn solve3(&mut self, n: usize, roles: ThreePegRoles) -> Result<(), IllegalMove> {
        match n {
            0 => Ok(()),
            1 => self.model.move_cheese(roles.source, roles.destination),
            _ => {
                self.solve3(n - 1, roles.to_via())?;
                self.model.move_cheese(roles.source, roles.destination)?;
                self.solve3(n - 1, roles.from_via())
            }
        }
    }

    /// Moves the top `n` cheeses from `roles.source` to `roles.destination`
    /// using four stools and the optimal split.
    ///
    /// # Errors
    ///
    /// Returns `TourError::SplitOverflow` before making any move of a pile
    /// whose optimal split cannot be computed, and `TourError::Bookkeeping`
    /// if the model rejects a move.
    #[instrument(level = "trace", skip(self))]
    pub fn solve4(&mut self, n: usize, roles: PegRoles) -> Result<(), TourError> {
        match n {
            0 => Ok(()),
            1 => self
                .model
                .move_cheese(roles.source, roles.destination)
                .map_err(bookkeeping),
            _ => {
                let i = self
                    .splits
                    .split_index(n)
                    .ok_or(TourError::SplitOverflow { cheeses: n })?;
                self.solve4(n - i, roles.park())?;
                self.solve3(i, roles.direct()).map_err(bookkeeping)?;
                self.solve4(n - i, roles.unpark())
            }
        }
    }
}

fn check_start(model: &PuzzleState, required: usize) -> Result<(), TourError> {
    if model.peg_count() < required {
        return Err(TourError::TooFewPegs {
            required,
            found: model.peg_count(),
        });
    }
    if let Some(peg) = (1..required).find(|&peg| model.top_cheese(peg).is_some()) {
        return Err(TourError::NotAtStart { peg });
    }
    Ok(())
}

fn bookkeeping(err: IllegalMove) -> TourError {
    error!(error = %err, "Solver produced an illegal move");
    TourError::Bookkeeping(err)
}

/// Size of the pile on stool 0. Cheese on any stool past the tour's last
/// one is not part of the pile.
fn pile_size(model: &PuzzleState) -> usize {
    model.peg(0).map_or(0, <[_]>::len)
}

#[cfg(debug_assertions)]
fn audit(model: &PuzzleState) -> Result<(), TourError> {
    model.check_invariants().map_err(bookkeeping)
}

/// Moves the pile on stool 0 to stool 3 in the minimum number of moves.
///
/// The model must have at least four stools with stools 1 to 3 empty.
/// Only the pile on stool 0 is moved; stools past the fourth are left as
/// they are. Afterwards stool 3 holds the pile in its original order and
/// the move count equals `cost4(n)`.
///
/// # Errors
///
/// Returns `TourError::TooFewPegs` or `TourError::NotAtStart` when the
/// model is not at the start of a tour, and `TourError::SplitOverflow` for
/// a pile too large to count. `TourError::Bookkeeping` means the solver
/// itself is wrong.
#[instrument(skip(model), fields(cheeses = pile_size(model)))]
pub fn solve_four_peg_tour(model: &mut PuzzleState) -> Result<(), TourError> {
    check_start(model, 4)?;
    let n = pile_size(model);

    TourSolver::new(model).solve4(n, PegRoles::new(0, 1, 2, 3))?;
    #[cfg(debug_assertions)]
    audit(model)?;

    info!(moves = model.move_count(), "Four-stool tour complete");
    Ok(())
}

/// Moves the pile on stool 0 to stool 2 with classic three-stool Hanoi.
///
/// # Errors
///
/// Same as [`solve_four_peg_tour`], for three stools.
#[instrument(skip(model), fields(cheeses = pile_size(model)))]
pub fn solve_three_peg_tour(model: &mut PuzzleState) -> Result<(), TourError> {
    check_start(model, 3)?;
    let n = pile_size(model);

    TourSolver::new(model)
        .solve3(n, ThreePegRoles::new(0, 1, 2))
        .map_err(bookkeeping)?;
    #[cfg(debug_assertions)]
    audit(model)?;

    info!(moves = model.move_count(), "Three-stool tour complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cheese, cost3, min_moves};

    fn filled(pegs: usize, cheeses: u32) -> PuzzleState {
        let mut model = PuzzleState::new(pegs).unwrap();
        model.fill_first_peg(cheeses).unwrap();
        model
    }

    #[test]
    fn test_three_cheese_tour() {
        let mut model = filled(4, 3);
        solve_four_peg_tour(&mut model).unwrap();

        let sizes: Vec<u32> = model.peg(3).unwrap().iter().map(Cheese::size).collect();
        assert_eq!(sizes, vec![3, 2, 1]);
        assert_eq!(model.move_count(), 5);
    }

    #[test]
    fn test_move_count_matches_cost() {
        for n in 1..=10u32 {
            let mut model = filled(4, n);
            solve_four_peg_tour(&mut model).unwrap();
            assert_eq!(model.move_count() as u64, min_moves(n as usize).unwrap());
            assert!(model.is_solved());
        }
    }

    #[test]
    fn test_empty_tour_is_noop() {
        let mut model = PuzzleState::new(4).unwrap();
        solve_four_peg_tour(&mut model).unwrap();
        assert_eq!(model.move_count(), 0);
    }

    #[test]
    fn test_too_few_pegs() {
        let mut model = filled(3, 2);
        assert_eq!(
            solve_four_peg_tour(&mut model),
            Err(TourError::TooFewPegs { required: 4, found: 3 })
        );
    }

    #[test]
    fn test_not_at_start() {
        let mut model = filled(4, 2);
        model.move_cheese(0, 2).unwrap();
        assert_eq!(
            solve_four_peg_tour(&mut model),
            Err(TourError::NotAtStart { peg: 2 })
        );
    }

    #[test]
    fn test_extra_pegs_are_left_alone() {
        let mut model = filled(6, 4);
        solve_four_peg_tour(&mut model).unwrap();
        assert_eq!(model.peg(3).map(<[_]>::len), Some(4));
        assert_eq!(model.move_count(), 9);
    }

    #[test]
    fn test_cheese_on_extra_peg_is_not_part_of_the_pile() {
        let mut model = filled(5, 3);
        model.add(Cheese::try_from(9).unwrap(), 4).unwrap();

        solve_four_peg_tour(&mut model).unwrap();
        let sizes: Vec<u32> = model.peg(3).unwrap().iter().map(Cheese::size).collect();
        assert_eq!(sizes, vec![3, 2, 1]);
        assert_eq!(model.top_cheese(4), Cheese::try_from(9).ok());
        assert_eq!(model.move_count(), 5);
    }

    #[test]
    fn test_three_stool_tour_ignores_extra_peg() {
        let mut model = filled(4, 2);
        model.add(Cheese::try_from(7).unwrap(), 3).unwrap();

        solve_three_peg_tour(&mut model).unwrap();
        assert_eq!(model.peg(2).map(<[_]>::len), Some(2));
        assert_eq!(model.peg(3).map(<[_]>::len), Some(1));
        assert_eq!(model.move_count(), 3);
    }

    #[test]
    fn test_split_overflow_is_reported_before_moving() {
        let mut model = PuzzleState::new(4).unwrap();
        let result = TourSolver::new(&mut model).solve4(5000, PegRoles::new(0, 1, 2, 3));
        assert_eq!(result, Err(TourError::SplitOverflow { cheeses: 5000 }));
        assert_eq!(model.move_count(), 0);
    }

    #[test]
    fn test_three_stool_tour() {
        for n in 1..=6u32 {
            let mut model = filled(3, n);
            solve_three_peg_tour(&mut model).unwrap();
            assert!(model.is_solved());
            assert_eq!(Some(model.move_count() as u64), cost3(n as usize));
        }
    }

    #[test]
    fn test_solve4_with_permuted_roles() {
        let mut model = PuzzleState::new(4).unwrap();
        for size in (1..=5).rev() {
            model.add(Cheese::try_from(size).unwrap(), 2).unwrap();
        }
        TourSolver::new(&mut model)
            .solve4(5, PegRoles::new(2, 0, 3, 1))
            .unwrap();
        assert_eq!(model.peg(1).map(<[_]>::len), Some(5));
        assert_eq!(model.move_count(), 13);
    }
}
