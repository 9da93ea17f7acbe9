//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::BoardAction`]. There is
//! no auto-repeat handling: every board action is a discrete press.

pub mod map;

pub use tile_match_types as types;

pub use map::{handle_key_event, should_quit};
