//! Match detection.
//!
//! A match is `MIN_RUN` or more equal, occupied colors in a row or column.
//! Every window of `MIN_RUN` consecutive cells is checked, so longer runs and
//! crossing runs are reported in full rather than as minimal triples.

use crate::grid::Grid;
use crate::types::MIN_RUN;

/// Indices of every cell that belongs to a run, ascending and deduplicated.
pub fn find_matches(grid: &Grid) -> Vec<usize> {
    let mut marked = vec![false; grid.len()];
    let mut any = false;

    for_each_run_window(grid, |window| {
        any = true;
        for &i in window {
            marked[i] = true;
        }
        false
    });

    if !any {
        return Vec::new();
    }
    marked
        .iter()
        .enumerate()
        .filter_map(|(i, &m)| m.then_some(i))
        .collect()
}

/// Whether the grid holds at least one run (stops at the first one).
pub fn has_match(grid: &Grid) -> bool {
    let mut found = false;
    for_each_run_window(grid, |_| {
        found = true;
        true
    });
    found
}

/// Calls `f` with each `MIN_RUN`-long window of equal occupied colors:
/// horizontal windows first in row-major order, then vertical ones.
/// Stops early when `f` returns true.
fn for_each_run_window(grid: &Grid, mut f: impl FnMut(&[usize; MIN_RUN]) -> bool) {
    let n = grid.size();
    if n < MIN_RUN {
        return;
    }
    let last_start = n - MIN_RUN;

    for row in 0..n {
        for col in 0..=last_start {
            let start = grid.index(row, col);
            let window: [usize; MIN_RUN] = std::array::from_fn(|k| start + k);
            if is_run(grid, &window) && f(&window) {
                return;
            }
        }
    }

    for row in 0..=last_start {
        for col in 0..n {
            let start = grid.index(row, col);
            let window: [usize; MIN_RUN] = std::array::from_fn(|k| start + k * n);
            if is_run(grid, &window) && f(&window) {
                return;
            }
        }
    }
}

fn is_run(grid: &Grid, window: &[usize]) -> bool {
    match grid.color(window[0]) {
        Some(color) => window[1..].iter().all(|&i| grid.color(i) == Some(color)),
        None => false,
    }
}
