use tile_match::core::{Grid, GridSnapshot, SequentialIds};
use tile_match::term::{color_rgb, BoardView, Overlay, StatusView, Viewport};
use tile_match::types::Color;

fn snapshot() -> GridSnapshot {
    let grid = Grid::from_rows(
        &[
            "RBGYRBGY", "B.YRBGYR", "GYRBGYRB", "YRBGYRBG", "RBGYRBGY", "BGYRBGYR",
            "GYRBGYRB", "YRBGYRBP",
        ],
        &mut SequentialIds::new(),
    );
    GridSnapshot::from_grid(&grid)
}

#[test]
fn board_view_renders_border_corners() {
    let view = BoardView::default();
    // 8 cells * 2 columns + border = 18 wide, 8 rows + border = 10 tall,
    // plus two lines for the message and key help.
    let fb = view.render(
        &snapshot(),
        &Overlay::default(),
        &StatusView::default(),
        Viewport::new(18, 12),
    );

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(17, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 9).unwrap().ch, '└');
    assert_eq!(fb.get(17, 9).unwrap().ch, '┘');
}

#[test]
fn tokens_use_their_color_and_empty_cells_a_dot() {
    let view = BoardView::default();
    let fb = view.render(
        &snapshot(),
        &Overlay::default(),
        &StatusView::default(),
        Viewport::new(18, 12),
    );

    let red = fb.get(1, 1).unwrap();
    assert_eq!(red.ch, '●');
    assert_eq!(red.style.fg, color_rgb(Color::Red));
    // Second column of the same cell is padding on the same background.
    assert_eq!(fb.get(2, 1).unwrap().ch, ' ');
    assert_eq!(fb.get(2, 1).unwrap().style.bg, red.style.bg);

    assert_eq!(fb.get(3, 2).unwrap().ch, '·');
    assert_eq!(fb.get(15, 8).unwrap().style.fg, color_rgb(Color::Purple));
}

#[test]
fn cursor_selection_and_hint_change_the_background() {
    let view = BoardView::default();
    let plain = view.render(
        &snapshot(),
        &Overlay::default(),
        &StatusView::default(),
        Viewport::new(18, 12),
    );
    let overlay = Overlay {
        cursor: Some(0),
        selected: Some(9),
        hint: Some([18, 19]),
    };
    let marked = view.render(&snapshot(), &overlay, &StatusView::default(), Viewport::new(18, 12));

    let bg = |fb: &tile_match::term::FrameBuffer, x, y| fb.get(x, y).unwrap().style.bg;
    // cursor (0,0), selected (1,1), hint (2,2) and (2,3)
    for (x, y) in [(1, 1), (3, 2), (5, 3), (7, 3)] {
        assert_ne!(bg(&marked, x, y), bg(&plain, x, y), "({x}, {y})");
    }
    assert_eq!(bg(&marked, 9, 3), bg(&plain, 9, 3));
    assert_ne!(bg(&marked, 1, 1), bg(&marked, 3, 2));
}

#[test]
fn side_panel_and_message_are_drawn_when_wide_enough() {
    let view = BoardView::default();
    let mut status = StatusView {
        moves: 12,
        best_chain: 3,
        shuffles: 1,
        message: Some("chain x3".to_string()),
        ..StatusView::default()
    };
    status.cleared.add(Color::Green);

    let fb = view.render(&snapshot(), &Overlay::default(), &status, Viewport::new(48, 16));
    let text: Vec<String> = (0..fb.height()).map(|y| fb.row_text(y)).collect();
    let all = text.join("\n");

    assert!(all.contains("MOVES"));
    assert!(all.contains("12"));
    assert!(all.contains("BEST CHAIN"));
    assert!(all.contains("SHUFFLES"));
    assert!(all.contains("CLEARED"));
    assert!(all.contains("chain x3"));
}

#[test]
fn narrow_viewport_skips_side_panel() {
    let view = BoardView::default();
    let status = StatusView {
        moves: 5,
        ..StatusView::default()
    };
    let fb = view.render(&snapshot(), &Overlay::default(), &status, Viewport::new(18, 12));
    for y in 0..fb.height() {
        assert!(!fb.row_text(y).contains("MOVES"));
    }
}
