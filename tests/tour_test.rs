//! Tests for the four-stool tour through the public API.

use toah_core::{Cheese, PuzzleState, SplitTable, TourError, solve_four_peg_tour};

fn filled(stools: usize, cheeses: u32) -> PuzzleState {
    let mut model = PuzzleState::new(stools).unwrap();
    model.fill_first_peg(cheeses).unwrap();
    model
}

fn sizes(model: &PuzzleState, peg: usize) -> Vec<u32> {
    model.peg(peg).unwrap().iter().map(Cheese::size).collect()
}

#[test]
fn test_three_cheese_scenario() {
    let mut model = filled(4, 3);
    assert_eq!(sizes(&model, 0), vec![3, 2, 1]);

    solve_four_peg_tour(&mut model).unwrap();

    assert_eq!(sizes(&model, 3), vec![3, 2, 1]);
    assert_eq!(model.move_count(), 5);
}

#[test]
fn test_tour_moves_whole_pile_in_order() {
    for n in 1..=12u32 {
        let mut model = filled(4, n);
        solve_four_peg_tour(&mut model).unwrap();

        for peg in 0..3 {
            assert!(model.peg(peg).unwrap().is_empty(), "stool {peg} not empty for n = {n}");
        }
        let expected: Vec<u32> = (1..=n).rev().collect();
        assert_eq!(sizes(&model, 3), expected);
    }
}

#[test]
fn test_tour_uses_minimum_moves() {
    let mut table = SplitTable::new();
    for n in 1..=12u32 {
        let mut model = filled(4, n);
        solve_four_peg_tour(&mut model).unwrap();
        assert_eq!(model.move_count() as u64, table.min_moves(n as usize).unwrap());
        assert_eq!(model.move_count(), model.move_sequence().len());
    }
}

#[test]
fn test_tour_history_replays_to_same_state() {
    let mut model = filled(4, 7);
    solve_four_peg_tour(&mut model).unwrap();

    let replayed = model.move_sequence().replay(4, 7).unwrap();
    assert_eq!(replayed, model);
    assert_eq!(replayed.move_count(), model.move_count());
}

#[test]
fn test_tour_needs_four_stools() {
    let mut model = filled(3, 4);
    let err = solve_four_peg_tour(&mut model).unwrap_err();
    assert_eq!(err, TourError::TooFewPegs { required: 4, found: 3 });
    assert!(err.to_string().contains("needs 4 stools"));
    assert_eq!(model.move_count(), 0);
}
