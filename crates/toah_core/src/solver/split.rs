//! Frame-Stewart cost recurrence for four stools.
//!
//! ```text
//! cost4(1) = 1
//! cost4(n) = min over i in 1..n of 2 * cost4(n - i) + cost3(i)
//! ```
//!
//! `i` is how many cheeses travel by plain three-stool Hanoi; the other
//! `n - i` are parked on a spare stool and brought back with the four-stool
//! method. The smallest minimising `i` is kept.

use tracing::{instrument, trace};

/// Optimal move count for `k` cheeses on exactly three stools, `2^k - 1`.
///
/// Returns `None` if the count does not fit in a `u64`.
pub fn cost3(k: usize) -> Option<u64> {
    let shift = u32::try_from(k).ok()?;
    1u64.checked_shl(shift).map(|power| power - 1)
}

/// Best way to split a pile on four stools.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Split {
    /// Minimum number of moves for the whole pile.
    pub moves: u64,
    /// Number of cheeses moved with the three-stool method.
    pub index: usize,
}

/// Memo table of [`Split`]s indexed by pile size.
///
/// Rows are filled bottom-up the first time a pile size is asked for, so
/// each `cost4(k)` is computed once.
#[derive(Debug, Clone, Default)]
pub struct SplitTable {
    rows: Vec<Split>,
}

impl SplitTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of pile sizes computed so far.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if nothing has been computed yet.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the optimal split for a pile of `n` cheeses.
    ///
    /// Returns `None` for `n == 0` or when the move count overflows `u64`.
    #[instrument(level = "trace", skip(self), fields(cached = self.rows.len()))]
    pub fn get(&mut self, n: usize) -> Option<Split> {
        if n == 0 {
            return None;
        }
        while self.rows.len() < n {
            let next = self.compute(self.rows.len() + 1)?;
            self.rows.push(next);
        }
        self.rows.get(n - 1).copied()
    }

    /// Returns `cost4(n)`.
    pub fn min_moves(&mut self, n: usize) -> Option<u64> {
        self.get(n).map(|split| split.moves)
    }

    /// Returns `split(n)`.
    pub fn split_index(&mut self, n: usize) -> Option<usize> {
        self.get(n).map(|split| split.index)
    }

    /// Evaluates every candidate split of `n`, given rows `1..n` are filled.
    fn compute(&self, n: usize) -> Option<Split> {
        if n == 1 {
            return Some(Split { moves: 1, index: 1 });
        }

        let mut best: Option<Split> = None;
        for i in 1..n {
            let Some(moves) = self.rows[n - i - 1]
                .moves
                .checked_mul(2)
                .and_then(|parked| cost3(i).and_then(|direct| parked.checked_add(direct)))
            else {
                continue;
            };
            if best.is_none_or(|b| moves < b.moves) {
                best = Some(Split { moves, index: i });
            }
        }

        trace!(n, ?best, "Computed split");
        best
    }
}

/// One-shot `split(n)` with a fresh table.
pub fn optimal_split(n: usize) -> Option<Split> {
    SplitTable::new().get(n)
}

/// One-shot `cost4(n)` with a fresh table.
pub fn min_moves(n: usize) -> Option<u64> {
    SplitTable::new().min_moves(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cost3_closed_form() {
        assert_eq!(cost3(0), Some(0));
        assert_eq!(cost3(1), Some(1));
        assert_eq!(cost3(3), Some(7));
        assert_eq!(cost3(63), Some(u64::MAX >> 1));
        assert_eq!(cost3(64), None);
    }

    #[test]
    fn test_known_four_stool_costs() {
        let mut table = SplitTable::new();
        let costs: Vec<_> = (1..=5).map(|n| table.min_moves(n).unwrap()).collect();
        assert_eq!(costs, vec![1, 3, 5, 9, 13]);
    }

    #[test]
    fn test_longer_known_sequence() {
        let mut table = SplitTable::new();
        let costs: Vec<_> = (1..=10).map(|n| table.min_moves(n).unwrap()).collect();
        assert_eq!(costs, vec![1, 3, 5, 9, 13, 17, 25, 33, 41, 49]);
    }

    #[test]
    fn test_ties_keep_smallest_index() {
        // cost4(4): i = 2 and i = 3 both give 9
        assert_eq!(optimal_split(4), Some(Split { moves: 9, index: 2 }));
        // cost4(5): i = 2 and i = 3 both give 13
        assert_eq!(optimal_split(5), Some(Split { moves: 13, index: 2 }));
        assert_eq!(optimal_split(3), Some(Split { moves: 5, index: 2 }));
        assert_eq!(optimal_split(2), Some(Split { moves: 3, index: 1 }));
    }

    #[test]
    fn test_zero_cheeses_has_no_split() {
        assert_eq!(optimal_split(0), None);
        assert_eq!(min_moves(0), None);
    }

    #[test]
    fn test_single_cheese() {
        assert_eq!(optimal_split(1), Some(Split { moves: 1, index: 1 }));
    }

    #[test]
    fn test_table_is_filled_incrementally() {
        let mut table = SplitTable::new();
        assert!(table.is_empty());
        table.get(6);
        assert_eq!(table.len(), 6);
        table.get(3);
        assert_eq!(table.len(), 6);
    }

    #[test]
    fn test_large_piles_stay_polynomial() {
        let mut table = SplitTable::new();
        let moves = table.min_moves(200).unwrap();
        assert!(moves < u64::MAX);
        assert_eq!(table.len(), 200);
    }

    #[test]
    fn test_split_never_worse_than_three_stools() {
        let mut table = SplitTable::new();
        for n in 1..=30 {
            assert!(table.min_moves(n).unwrap() <= cost3(n).unwrap());
        }
    }
}
