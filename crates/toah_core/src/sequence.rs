//! Ordered record of moves made against a model.

use super::{ModelError, Move, PuzzleState};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Sequence of moves in a Tour of Anne Hoy game.
///
/// The sequence itself does not check legality; it only records. Legality
/// is checked again when the sequence is replayed against a model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoveSequence {
    moves: Vec<Move>,
}

impl MoveSequence {
    /// Creates an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the move at position `i`, if any.
    pub fn get(&self, i: usize) -> Option<Move> {
        self.moves.get(i).copied()
    }

    /// Appends a move from `from` to `to`.
    pub fn add_move(&mut self, from: usize, to: usize) {
        self.moves.push(Move::new(from, to));
    }

    /// Removes and returns the last move.
    pub(crate) fn pop_move(&mut self) -> Option<Move> {
        self.moves.pop()
    }

    /// Returns the most recent move, if any.
    pub fn last(&self) -> Option<Move> {
        self.moves.last().copied()
    }

    /// Returns the number of moves recorded.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Returns true if no moves were recorded.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Iterates over the moves in order.
    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter()
    }

    /// Returns the moves as a slice.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Rebuilds the model these moves lead to.
    ///
    /// Starts from a fresh model with `peg_count` stools and `cheese_count`
    /// cheeses on the first stool, then applies every move in order.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::NoPegs` for a zero stool count and
    /// `ModelError::Replay` naming the first move that was rejected.
    #[instrument(skip(self), fields(moves = self.moves.len()))]
    pub fn replay(&self, peg_count: usize, cheese_count: u32) -> Result<PuzzleState, ModelError> {
        let mut model = PuzzleState::new(peg_count)?;
        model.fill_first_peg(cheese_count).map_err(ModelError::Setup)?;

        for (step, mov) in self.moves.iter().enumerate() {
            model
                .move_cheese(mov.from, mov.to)
                .map_err(|cause| ModelError::Replay { step, cause })?;
        }

        debug!(final_moves = model.move_count(), "Replay complete");
        Ok(model)
    }
}

impl From<Vec<Move>> for MoveSequence {
    fn from(moves: Vec<Move>) -> Self {
        Self { moves }
    }
}

impl FromIterator<Move> for MoveSequence {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        Self {
            moves: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a MoveSequence {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl std::fmt::Display for MoveSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, mov) in self.moves.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", mov)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::IllegalMove;

    #[test]
    fn test_empty_sequence() {
        let seq = MoveSequence::new();
        assert!(seq.is_empty());
        assert_eq!(seq.to_string(), "[]");
        assert_eq!(seq, MoveSequence::from(vec![]));
    }

    #[test]
    fn test_get_move() {
        let seq = MoveSequence::from(vec![Move::new(1, 2)]);
        assert_eq!(seq.get(0), Some(Move::new(1, 2)));
        assert_eq!(seq.get(1), None);
        assert_eq!(seq.len(), 1);
    }

    #[test]
    fn test_last_and_pop() {
        let mut seq = MoveSequence::from(vec![Move::new(0, 1), Move::new(0, 2)]);
        assert_eq!(seq.last(), Some(Move::new(0, 2)));
        assert_eq!(seq.pop_move(), Some(Move::new(0, 2)));
        assert_eq!(seq.last(), Some(Move::new(0, 1)));
        assert_eq!(seq.len(), 1);
    }

    #[test]
    fn test_display_lists_pairs() {
        let seq: MoveSequence = [(0, 1), (0, 2), (1, 2)].into_iter().map(Move::from).collect();
        assert_eq!(seq.to_string(), "[(0, 1), (0, 2), (1, 2)]");
    }

    #[test]
    fn test_replay_empty_matches_fresh_model() {
        let seq = MoveSequence::new();
        let mut fresh = PuzzleState::new(2).unwrap();
        fresh.fill_first_peg(2).unwrap();
        assert_eq!(seq.replay(2, 2).unwrap(), fresh);
    }

    #[test]
    fn test_replay_applies_moves() {
        let seq = MoveSequence::from(vec![Move::new(0, 1), Move::new(0, 2), Move::new(1, 2)]);
        let model = seq.replay(3, 2).unwrap();
        assert_eq!(model.peg(2).map(<[_]>::len), Some(2));
        assert_eq!(model.move_count(), 3);
    }

    #[test]
    fn test_replay_reports_illegal_step() {
        let seq = MoveSequence::from(vec![Move::new(0, 1), Move::new(0, 1)]);
        let err = seq.replay(3, 2).unwrap_err();
        assert!(matches!(
            err,
            ModelError::Replay {
                step: 1,
                cause: IllegalMove::OntoSmaller { .. }
            }
        ));
    }

    #[test]
    fn test_serializes_as_list() {
        let seq = MoveSequence::from(vec![Move::new(0, 3)]);
        let json = serde_json::to_string(&seq).unwrap();
        assert_eq!(json, r#"[{"from":0,"to":3}]"#);
    }
}
