//! Grid module - the square board of cells
//!
//! The grid is `size x size` cells stored flat in row-major order
//! (`row * size + col`). Every index outside `[0, size²)` is a programmer
//! error and panics; the grid is always engine-constructed, so there is no
//! recoverable path for a bad index.

use crate::factory::IdSource;
use crate::types::{Cell, Color, Token, MAX_GRID_SIZE};

/// Square board of cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    /// Flat array of cells, row-major order (row * size + col)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an all-empty grid
    pub fn new(size: usize) -> Self {
        assert!(
            size > 0 && size <= MAX_GRID_SIZE,
            "grid size {size} out of range 1..={MAX_GRID_SIZE}"
        );
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Build from a flat row-major cell list of length `size²`
    pub fn from_cells(size: usize, cells: Vec<Cell>) -> Self {
        assert_eq!(
            cells.len(),
            size * size,
            "a {size}x{size} grid needs {} cells",
            size * size
        );
        let mut grid = Self::new(size);
        grid.cells = cells;
        grid
    }

    /// Build from a flat color list, assigning ids from `ids` in index order
    pub fn from_colors(size: usize, colors: &[Option<Color>], ids: &mut impl IdSource) -> Self {
        let cells = colors
            .iter()
            .map(|c| match c {
                Some(color) => Cell::Occupied(Token::new(ids.next_id(), *color)),
                None => Cell::Empty,
            })
            .collect();
        Self::from_cells(size, cells)
    }

    /// Build from text rows, one char per cell.
    ///
    /// Letters are color tags (see [`Color::letter`]), `.` is an empty cell.
    /// Handy for fixtures:
    ///
    /// ```
    /// use tile_match_core::{Grid, SequentialIds};
    ///
    /// let grid = Grid::from_rows(&["RRG", "B.G", "RRR"], &mut SequentialIds::new());
    /// assert_eq!(grid.size(), 3);
    /// assert!(grid.get(4).is_empty());
    /// ```
    pub fn from_rows(rows: &[&str], ids: &mut impl IdSource) -> Self {
        let size = rows.len();
        let mut colors = Vec::with_capacity(size * size);
        for row in rows {
            assert_eq!(
                row.chars().count(),
                size,
                "row {row:?} does not match grid size {size}"
            );
            for ch in row.chars() {
                colors.push(color_from_letter(ch));
            }
        }
        Self::from_colors(size, &colors, ids)
    }

    /// Render as text rows (inverse of [`Grid::from_rows`])
    pub fn to_rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.size)
            .map(|row| {
                row.iter()
                    .map(|c| c.color().map_or('.', |color| color.letter()))
                    .collect()
            })
            .collect()
    }

    /// Edge length
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of cells (`size²`)
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Flat index of (row, col)
    #[inline(always)]
    pub fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.size && col < self.size,
            "({row}, {col}) is outside a {0}x{0} grid",
            self.size
        );
        row * self.size + col
    }

    /// (row, col) of a flat index
    #[inline(always)]
    pub fn row_col(&self, index: usize) -> (usize, usize) {
        self.check(index);
        (index / self.size, index % self.size)
    }

    pub fn get(&self, index: usize) -> Cell {
        self.check(index);
        self.cells[index]
    }

    pub fn set(&mut self, index: usize, cell: Cell) {
        self.check(index);
        self.cells[index] = cell;
    }

    /// Empty a cell, returning the token it held
    pub fn take(&mut self, index: usize) -> Option<Token> {
        self.check(index);
        std::mem::take(&mut self.cells[index]).token()
    }

    pub fn color(&self, index: usize) -> Option<Color> {
        self.get(index).color()
    }

    /// Exchange the contents of two cells
    pub fn swap(&mut self, a: usize, b: usize) {
        self.check(a);
        self.check(b);
        self.cells.swap(a, b);
    }

    /// True when `a` and `b` are horizontal or vertical neighbors.
    ///
    /// Diagonals and wraparound across row edges are not adjacent.
    pub fn is_adjacent(&self, a: usize, b: usize) -> bool {
        let (ar, ac) = self.row_col(a);
        let (br, bc) = self.row_col(b);
        (ar == br && ac.abs_diff(bc) == 1) || (ac == bc && ar.abs_diff(br) == 1)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    pub fn has_empty(&self) -> bool {
        !self.is_full()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Occupied tokens in index order
    pub fn tokens(&self) -> impl Iterator<Item = Token> + '_ {
        self.cells.iter().filter_map(Cell::token)
    }

    /// Row-major color view
    pub fn colors(&self) -> Vec<Option<Color>> {
        self.cells.iter().map(Cell::color).collect()
    }

    /// Occupied cell count per color, indexed by [`Color::index`]
    pub fn color_counts(&self) -> [usize; Color::COUNT] {
        let mut counts = [0; Color::COUNT];
        for token in self.tokens() {
            counts[token.color.index()] += 1;
        }
        counts
    }

    #[inline(always)]
    fn check(&self, index: usize) {
        assert!(
            index < self.cells.len(),
            "index {index} is outside a {0}x{0} grid",
            self.size
        );
    }
}

fn color_from_letter(ch: char) -> Option<Color> {
    if ch == '.' {
        return None;
    }
    let color = Color::ALL
        .into_iter()
        .find(|c| c.letter() == ch.to_ascii_uppercase());
    assert!(color.is_some(), "unknown color tag {ch:?}");
    color
}
