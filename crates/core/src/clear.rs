//! Clearing cells and reporting what was removed.
//!
//! Callers use the report to drive their own per-color statistics; the
//! engine keeps no score.

use arrayvec::ArrayVec;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::grid::Grid;
use crate::types::{Color, Token};

/// Count of cleared tokens per color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColorTally {
    counts: [u32; Color::COUNT],
}

impl ColorTally {
    pub fn add(&mut self, color: Color) {
        self.counts[color.index()] += 1;
    }

    pub fn get(&self, color: Color) -> u32 {
        self.counts[color.index()]
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    pub fn merge(&mut self, other: &ColorTally) {
        for (mine, theirs) in self.counts.iter_mut().zip(other.counts) {
            *mine += theirs;
        }
    }

    /// Colors with a non-zero count, canonical order
    pub fn iter(&self) -> impl Iterator<Item = (Color, u32)> + '_ {
        Color::ALL
            .into_iter()
            .map(|c| (c, self.get(c)))
            .filter(|&(_, n)| n > 0)
    }
}

impl Serialize for ColorTally {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (color, n) in self.iter() {
            map.serialize_entry(color.as_str(), &n)?;
        }
        map.end()
    }
}

/// What a clear removed from the grid
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClearReport {
    /// Each cleared cell once, with the token it held, in request order
    pub cleared: Vec<(usize, Token)>,
    pub tally: ColorTally,
}

impl ClearReport {
    pub fn len(&self) -> usize {
        self.cleared.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cleared.is_empty()
    }

    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.cleared.iter().map(|&(i, _)| i)
    }
}

/// Empty every listed cell.
///
/// Cells that are already empty (or listed twice) are skipped, so every
/// reported token was really on the grid.
pub fn clear_matches(grid: &mut Grid, indices: &[usize]) -> ClearReport {
    let mut report = ClearReport::default();
    for &index in indices {
        if let Some(token) = grid.take(index) {
            report.tally.add(token.color);
            report.cleared.push((index, token));
        }
    }
    report
}

/// Remove every token of one color.
pub fn clear_color(grid: &mut Grid, color: Color) -> ClearReport {
    let indices: Vec<usize> = (0..grid.len())
        .filter(|&i| grid.color(i) == Some(color))
        .collect();
    clear_matches(grid, &indices)
}

/// Remove the 3x3 block centred on `center`, clipped at the grid edges.
pub fn clear_area(grid: &mut Grid, center: usize) -> ClearReport {
    let (row, col) = grid.row_col(center);
    let last = grid.size() - 1;

    let mut indices: ArrayVec<usize, 9> = ArrayVec::new();
    for r in row.saturating_sub(1)..=(row + 1).min(last) {
        for c in col.saturating_sub(1)..=(col + 1).min(last) {
            indices.push(grid.index(r, c));
        }
    }
    clear_matches(grid, &indices)
}
