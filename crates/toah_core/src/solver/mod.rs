//! Automatic solvers for moving a pile from the first stool to the last.

mod roles;
mod split;
mod tour;

pub use roles::{PegRoles, ThreePegRoles};
pub use split::{Split, SplitTable, cost3, min_moves, optimal_split};
pub use tour::{TourError, TourSolver, solve_four_peg_tour, solve_three_peg_tour};
