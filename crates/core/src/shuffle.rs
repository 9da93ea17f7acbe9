//! Shuffle-until-solvable.
//!
//! The retry loop is bounded. Each attempt is a Fisher-Yates permutation of
//! the tokens already on the grid. The first candidate with no run and at
//! least one move wins; failing that, the first candidate that merely has a
//! move; failing that, a constructive layout that is playable by
//! construction.

use log::{debug, warn};

use crate::factory::{IdSource, TokenFactory};
use crate::grid::Grid;
use crate::hint::has_potential_match;
use crate::matching::has_match;
use crate::types::{Cell, Color, Token};

/// Rearrange the grid's tokens into a configuration with at least one move.
pub fn shuffle_board<I: IdSource>(
    grid: &Grid,
    factory: &mut TokenFactory<I>,
    attempts: u32,
) -> Grid {
    let mut tokens: Vec<Token> = grid.tokens().collect();
    let mut solvable: Option<Grid> = None;

    for attempt in 1..=attempts {
        let candidate = reshuffle(grid.size(), &mut tokens, factory);
        if !has_potential_match(&candidate) {
            continue;
        }
        if !has_match(&candidate) {
            debug!("shuffle settled after {attempt} attempt(s)");
            return candidate;
        }
        if solvable.is_none() {
            solvable = Some(candidate);
        }
    }

    if let Some(candidate) = solvable {
        debug!("shuffle kept a solvable layout that still holds a run");
        return candidate;
    }

    warn!(
        "no solvable shuffle in {attempts} attempt(s); building a constructive {0}x{0} layout",
        grid.size()
    );
    constructive_layout(grid.size(), factory)
}

/// Permute `tokens` in place and lay them out row-major.
///
/// Cells beyond the token count get fresh tokens.
fn reshuffle<I: IdSource>(
    size: usize,
    tokens: &mut [Token],
    factory: &mut TokenFactory<I>,
) -> Grid {
    factory.rng_mut().shuffle(tokens);

    let mut out = Grid::new(size);
    let mut pool = tokens.iter().copied();
    for index in 0..out.len() {
        let token = pool.next().unwrap_or_else(|| factory.spawn());
        out.set(index, Cell::Occupied(token));
    }
    out
}

/// Checkerboard of two palette colors.
///
/// Neighbors always differ, so there is no run, and for any size >= 3
/// swapping cells 1 and `size + 1` completes a run at the start of row 0.
pub fn constructive_layout<I: IdSource>(size: usize, factory: &mut TokenFactory<I>) -> Grid {
    let (even, odd) = two_colors(factory);
    let mut out = Grid::new(size);
    for index in 0..out.len() {
        let (row, col) = out.row_col(index);
        let color = if (row + col) % 2 == 0 { even } else { odd };
        out.set(index, Cell::Occupied(factory.spawn_colored(color)));
    }
    debug_assert!(!has_match(&out));
    debug_assert!(size < 3 || has_potential_match(&out));
    out
}

fn two_colors<I: IdSource>(factory: &mut TokenFactory<I>) -> (Color, Color) {
    let first = factory.random_color();
    loop {
        let second = factory.random_color();
        if second != first {
            return (first, second);
        }
    }
}
