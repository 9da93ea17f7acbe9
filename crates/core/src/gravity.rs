//! Gravity and refill.
//!
//! Each column is compacted independently: surviving tokens slide down in
//! their original order and fresh tokens enter from the top. Refills are
//! not checked against the match rules, which is what produces cascades.

use arrayvec::ArrayVec;

use crate::factory::{IdSource, TokenFactory};
use crate::grid::Grid;
use crate::types::{Cell, Token, MAX_GRID_SIZE};

/// Let tokens fall and refill the gaps.
///
/// Returns true if any column had at least one empty cell.
pub fn apply_gravity_and_refill<I: IdSource>(
    grid: &mut Grid,
    factory: &mut TokenFactory<I>,
) -> bool {
    let n = grid.size();
    let mut changed = false;

    for col in 0..n {
        let mut survivors: ArrayVec<Token, MAX_GRID_SIZE> = ArrayVec::new();
        for row in 0..n {
            if let Some(token) = grid.get(grid.index(row, col)).token() {
                survivors.push(token);
            }
        }

        let missing = n - survivors.len();
        if missing == 0 {
            continue;
        }
        changed = true;

        for row in 0..missing {
            let index = grid.index(row, col);
            grid.set(index, Cell::Occupied(factory.spawn()));
        }
        for (offset, token) in survivors.into_iter().enumerate() {
            let index = grid.index(missing + offset, col);
            grid.set(index, Cell::Occupied(token));
        }
    }

    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Palette;
    use crate::factory::SequentialIds;
    use crate::types::TokenId;

    fn factory() -> TokenFactory {
        TokenFactory::with_ids(9, Palette::default(), SequentialIds::starting_at(1000))
    }

    #[test]
    fn full_grid_is_unchanged() {
        let mut g = Grid::from_rows(&["RGB", "GBR", "BRG"], &mut SequentialIds::new());
        let before = g.clone();
        assert!(!apply_gravity_and_refill(&mut g, &mut factory()));
        assert_eq!(g, before);
    }

    #[test]
    fn survivors_fall_below_new_tokens() {
        let mut g = Grid::from_rows(&["R.B", ".GY", "P.O"], &mut SequentialIds::new());
        let mut f = factory();
        assert!(apply_gravity_and_refill(&mut g, &mut f));
        assert!(g.is_full());

        let rows = g.to_rows();
        // Column 0: R, P survive below one fresh token.
        assert_eq!(rows[1].as_bytes()[0], b'R');
        assert_eq!(rows[2].as_bytes()[0], b'P');
        // Column 1: G survives below two fresh tokens.
        assert_eq!(rows[2].as_bytes()[1], b'G');
        // Column 2 was full and keeps its order.
        assert_eq!(
            [rows[0].as_bytes()[2], rows[1].as_bytes()[2], rows[2].as_bytes()[2]],
            *b"BYO"
        );

        // Exactly three fresh ids were handed out, all on top.
        for index in [0, 1, 4] {
            assert!(g.get(index).token().unwrap().id >= TokenId(1000));
        }
        assert_eq!(f.ids_mut().peek(), TokenId(1003));
    }

    #[test]
    fn fully_cleared_column_is_all_new() {
        let mut g = Grid::from_rows(&[".GB", ".BR", ".RG"], &mut SequentialIds::new());
        apply_gravity_and_refill(&mut g, &mut factory());
        for row in 0..3 {
            assert!(g.get(g.index(row, 0)).token().unwrap().id >= TokenId(1000));
        }
    }
}
