//! Tile-match (workspace facade crate).
//!
//! Re-exports the workspace crates as `tile_match::{core,input,term,types}`
//! and hosts [`session`], the caller-side controller the binary drives.

pub use tile_match_core as core;
pub use tile_match_input as input;
pub use tile_match_term as term;
pub use tile_match_types as types;

pub mod session;
