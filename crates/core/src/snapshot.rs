//! Snapshot module - serializable, read-only copy of a grid

use serde::Serialize;

use crate::grid::Grid;
use crate::types::{Color, TokenId};

/// One occupied cell as seen by renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CellSnapshot {
    pub id: TokenId,
    pub color: Color,
}

/// Read-only copy of a grid for renderers and JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridSnapshot {
    pub size: usize,
    /// Row-major; `None` is an empty cell
    pub cells: Vec<Option<CellSnapshot>>,
}

impl GridSnapshot {
    pub fn from_grid(grid: &Grid) -> Self {
        let cells = grid
            .cells()
            .iter()
            .map(|cell| {
                cell.token().map(|t| CellSnapshot {
                    id: t.id,
                    color: t.color,
                })
            })
            .collect();
        Self {
            size: grid.size(),
            cells,
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Option<CellSnapshot> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.cells[row * self.size + col]
    }
}

impl From<&Grid> for GridSnapshot {
    fn from(grid: &Grid) -> Self {
        Self::from_grid(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::SequentialIds;

    #[test]
    fn snapshot_mirrors_grid() {
        let grid = Grid::from_rows(&["RG", ".B"], &mut SequentialIds::new());
        let snap = GridSnapshot::from_grid(&grid);
        assert_eq!(snap.size, 2);
        assert_eq!(snap.get(0, 1).map(|c| c.color), Some(Color::Green));
        assert_eq!(snap.get(1, 0), None);
        assert_eq!(snap.get(1, 1).map(|c| c.id), Some(TokenId(2)));
        assert_eq!(snap.get(2, 0), None);
    }
}
