//! BoardView: maps a grid snapshot plus UI markers into a framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{ColorTally, GridSnapshot};
use crate::fb::{FrameBuffer, Rgb, Style};
use crate::types::Color;

const BACKDROP: Rgb = Rgb::new(0, 0, 0);
const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const HINT_BG: Rgb = Rgb::new(40, 90, 50);
const CURSOR_BG: Rgb = Rgb::new(90, 90, 110);
const SELECTED_BG: Rgb = Rgb::new(140, 120, 40);

const TOKEN_GLYPH: char = '●';
const EMPTY_GLYPH: char = '·';

const HELP: &str = "arrows move  space swap  ? hint  b bomb  c jar  r restart  q quit";

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Cursor, selection and hint markers drawn over the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overlay {
    pub cursor: Option<usize>,
    pub selected: Option<usize>,
    pub hint: Option<[usize; 2]>,
}

/// Session counters shown next to the board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusView {
    pub moves: u32,
    pub best_chain: u32,
    pub shuffles: u32,
    pub cleared: ColorTally,
    /// One-line notice under the board
    pub message: Option<String>,
    /// Resolution steps are still pending
    pub busy: bool,
}

/// Lightweight terminal renderer for the board.
pub struct BoardView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for BoardView {
    fn default() -> Self {
        // 2x1 compensates for the usual terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl BoardView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        snap: &GridSnapshot,
        overlay: &Overlay,
        status: &StatusView,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.fill(Style::default());

        let size = snap.size as u16;
        let frame_w = size * self.cell_w + 2;
        let frame_h = size * self.cell_h + 2;
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h + 2) / 2;

        self.draw_border(fb, start_x, start_y, frame_w, frame_h);

        for row in 0..snap.size {
            for col in 0..snap.size {
                let index = row * snap.size + col;
                let bg = cell_background(index, overlay);
                let (ch, style) = match snap.cells[index] {
                    Some(cell) => (TOKEN_GLYPH, Style::new(color_rgb(cell.color), bg).bold()),
                    None => (EMPTY_GLYPH, Style::new(Rgb::new(90, 90, 100), bg)),
                };
                let px = start_x + 1 + col as u16 * self.cell_w;
                let py = start_y + 1 + row as u16 * self.cell_h;
                fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
                fb.put(px, py, ch, style);
            }
        }

        let below = start_y.saturating_add(frame_h);
        if let Some(message) = &status.message {
            let x = start_x + frame_w.saturating_sub(message.chars().count() as u16) / 2;
            fb.put_str(x, below, message, Style::default().bold());
        }
        let help_x = viewport.width.saturating_sub(HELP.len() as u16) / 2;
        fb.put_str(help_x, below.saturating_add(1), HELP, dim_text());

        self.draw_side_panel(fb, status, viewport, start_x + frame_w + 2, start_y);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &GridSnapshot,
        overlay: &Overlay,
        status: &StatusView,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, overlay, status, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let style = Style::new(Rgb::new(200, 200, 200), BACKDROP);
        fb.put(x, y, '┌', style);
        fb.put(x + w - 1, y, '┐', style);
        fb.put(x, y + h - 1, '└', style);
        fb.put(x + w - 1, y + h - 1, '┘', style);
        for dx in 1..w - 1 {
            fb.put(x + dx, y, '─', style);
            fb.put(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put(x, y + dy, '│', style);
            fb.put(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        status: &StatusView,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x.saturating_add(12) > viewport.width {
            return;
        }
        let label = Style::default().bold();
        let value = Style::default();

        let mut y = start_y;
        for (name, n) in [
            ("MOVES", status.moves),
            ("BEST CHAIN", status.best_chain),
            ("SHUFFLES", status.shuffles),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y + 1, n, value);
            y += 3;
        }

        fb.put_str(panel_x, y, "CLEARED", label);
        for color in Color::ALL {
            y += 1;
            fb.put(panel_x, y, TOKEN_GLYPH, Style::new(color_rgb(color), BACKDROP));
            fb.put_u32(panel_x + 2, y, status.cleared.get(color), value);
        }

        if status.busy {
            fb.put_str(panel_x, y + 2, "...", dim_text());
        }
    }
}

fn cell_background(index: usize, overlay: &Overlay) -> Rgb {
    if overlay.selected == Some(index) {
        SELECTED_BG
    } else if overlay.cursor == Some(index) {
        CURSOR_BG
    } else if overlay.hint.is_some_and(|pair| pair.contains(&index)) {
        HINT_BG
    } else {
        BOARD_BG
    }
}

fn dim_text() -> Style {
    Style::new(Rgb::new(130, 130, 140), BACKDROP)
}

/// Display color for a token color
pub fn color_rgb(color: Color) -> Rgb {
    match color {
        Color::Red => Rgb::new(230, 70, 70),
        Color::Blue => Rgb::new(70, 120, 230),
        Color::Green => Rgb::new(80, 200, 100),
        Color::Yellow => Rgb::new(240, 210, 70),
        Color::Purple => Rgb::new(170, 90, 210),
        Color::Orange => Rgb::new(255, 150, 40),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_color_has_a_distinct_rgb() {
        for (i, a) in Color::ALL.iter().enumerate() {
            for b in &Color::ALL[i + 1..] {
                assert_ne!(color_rgb(*a), color_rgb(*b));
            }
        }
    }

    #[test]
    fn selection_wins_over_cursor_and_hint() {
        let overlay = Overlay {
            cursor: Some(3),
            selected: Some(3),
            hint: Some([3, 4]),
        };
        assert_eq!(cell_background(3, &overlay), SELECTED_BG);
        assert_eq!(cell_background(4, &overlay), HINT_BG);
        assert_eq!(cell_background(5, &overlay), BOARD_BG);
    }
}
