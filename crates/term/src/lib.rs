//! Terminal board renderer.
//!
//! Renders a grid snapshot into a simple framebuffer that is then flushed to
//! a terminal backend. No widget toolkit is involved.
//!
//! - [`fb`]: framebuffer of styled glyphs (pure, testable)
//! - [`board_view`]: maps a [`core::GridSnapshot`] plus UI overlay into a framebuffer
//! - [`renderer`]: diffs framebuffers and writes `crossterm` commands

pub mod board_view;
pub mod fb;
pub mod renderer;

pub use tile_match_core as core;
pub use tile_match_types as types;

pub use board_view::{color_rgb, BoardView, Overlay, StatusView, Viewport};
pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
