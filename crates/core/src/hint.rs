//! Swap validation and potential-move search.
//!
//! Both are the same simulate-and-check step: swap two neighbors on a copy
//! and run match detection. The search walks candidate pairs in a fixed
//! order, so the move it returns (and shows as a hint) is deterministic.

use crate::grid::Grid;
use crate::matching::{find_matches, has_match};

/// A swap that would create at least one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PotentialMatch {
    /// The two cells to exchange, in scan order
    pub swap: [usize; 2],
    /// Cells that would match after the swap, ascending
    pub matches: Vec<usize>,
}

/// Swap `a` and `b` on a copy and report whether the result has a match.
///
/// The swapped grid is returned either way; the caller commits or drops it.
///
/// # Panics
///
/// If either index is out of bounds or the cells are not 4-adjacent.
pub fn validate_swap(grid: &Grid, a: usize, b: usize) -> (bool, Grid) {
    assert!(
        grid.is_adjacent(a, b),
        "cells {a} and {b} are not horizontal or vertical neighbors"
    );
    let mut swapped = grid.clone();
    swapped.swap(a, b);
    (has_match(&swapped), swapped)
}

/// First swap, in scan order, that would create a match.
///
/// Horizontal pairs are tried first (row by row, left to right), then
/// vertical pairs (column by column, top to bottom). Pairs touching an empty
/// cell are skipped. `None` means stalemate.
pub fn find_potential_match(grid: &Grid) -> Option<PotentialMatch> {
    let mut scratch = grid.clone();
    for [a, b] in candidate_pairs(grid.size()) {
        if grid.get(a).is_empty() || grid.get(b).is_empty() {
            continue;
        }
        scratch.swap(a, b);
        let found = has_match(&scratch);
        let matches = if found {
            find_matches(&scratch)
        } else {
            Vec::new()
        };
        scratch.swap(a, b);

        if found {
            return Some(PotentialMatch {
                swap: [a, b],
                matches,
            });
        }
    }
    None
}

/// Whether any swap creates a match.
pub fn has_potential_match(grid: &Grid) -> bool {
    find_potential_match(grid).is_some()
}

/// Every adjacent pair in scan order.
pub fn candidate_pairs(n: usize) -> impl Iterator<Item = [usize; 2]> {
    let horizontal = (0..n).flat_map(move |row| {
        (0..n.saturating_sub(1)).map(move |col| [row * n + col, row * n + col + 1])
    });
    let vertical = (0..n).flat_map(move |col| {
        (0..n.saturating_sub(1)).map(move |row| [row * n + col, (row + 1) * n + col])
    });
    horizontal.chain(vertical)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::SequentialIds;

    fn grid(rows: &[&str]) -> Grid {
        Grid::from_rows(rows, &mut SequentialIds::new())
    }

    #[test]
    fn candidate_order_is_horizontal_then_column_major() {
        let pairs: Vec<_> = candidate_pairs(3).collect();
        assert_eq!(pairs.len(), 12);
        assert_eq!(&pairs[..3], &[[0, 1], [1, 2], [3, 4]]);
        assert_eq!(pairs[6], [0, 3]);
        assert_eq!(pairs[7], [3, 6]);
        assert_eq!(pairs[8], [1, 4]);
    }

    #[test]
    fn validate_swap_reports_match_and_returns_swapped_grid() {
        let g = grid(&["RRG", "BGR", "YBY"]);
        let (ok, swapped) = validate_swap(&g, 2, 5);
        assert!(ok);
        assert_eq!(swapped.to_rows(), ["RRR", "BGG", "YBY"]);
        // The input is untouched.
        assert_eq!(g.to_rows(), ["RRG", "BGR", "YBY"]);
    }

    #[test]
    fn validate_swap_without_match_still_swaps() {
        let g = grid(&["RGB", "GBR", "BRG"]);
        let (ok, swapped) = validate_swap(&g, 0, 1);
        assert!(!ok);
        assert_eq!(swapped.to_rows(), ["GRB", "GBR", "BRG"]);
    }

    #[test]
    #[should_panic(expected = "not horizontal or vertical neighbors")]
    fn validate_swap_rejects_diagonal() {
        let g = grid(&["RGB", "GBR", "BRG"]);
        validate_swap(&g, 0, 4);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn validate_swap_rejects_out_of_bounds() {
        let g = grid(&["RGB", "GBR", "BRG"]);
        validate_swap(&g, 8, 9);
    }

    #[test]
    fn potential_match_skips_empty_cells() {
        // Moving the empty cell would "create" RRR in row 0 if empties were swappable.
        let g = grid(&["RR.", "GBR", "BGY"]);
        assert_eq!(find_potential_match(&g), None);
    }

    #[test]
    fn stalemate_has_no_potential_match() {
        let g = grid(&["RGB", "GBR", "BRG"]);
        assert!(!has_potential_match(&g));
    }
}
