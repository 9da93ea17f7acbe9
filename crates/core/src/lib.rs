//! Core board engine - pure, deterministic, and testable
//!
//! This crate owns the tile-matching rules: grid representation, match
//! detection, gravity and refill, shuffle-until-solvable, swap validation
//! and hint search. It has **no dependencies** on terminals or I/O:
//!
//! - **Deterministic**: every random draw goes through one seeded [`SimpleRng`]
//! - **Explicit**: the grid is a plain value passed to every operation
//! - **Bounded**: shuffles and settles have retry limits, so every call terminates
//!
//! # Module Structure
//!
//! - [`grid`]: square grid stored flat in row-major order
//! - [`matching`]: run detection (three or more in a row or column)
//! - [`clear`]: removing matched cells and tallying their colors
//! - [`gravity`]: per-column fall and top refill
//! - [`hint`]: swap validation and deterministic potential-move search
//! - [`shuffle`]: bounded reshuffle with a constructive fallback
//! - [`engine`]: board creation and single-step resolution
//! - [`factory`]: token id sources and the token factory
//! - [`rng`]: seedable LCG used for all randomness
//! - [`config`]: validated engine configuration and palettes
//! - [`snapshot`]: serializable read-only view for renderers and JSON output
//!
//! # Resolution Loop
//!
//! Callers run [`Engine::step`] until it returns [`StepOutcome::Stable`]:
//!
//! 1. runs present: clear them ([`StepOutcome::Cleared`])
//! 2. empty cells: gravity and refill ([`StepOutcome::Refilled`])
//! 3. no move anywhere: reshuffle ([`StepOutcome::Shuffled`])
//! 4. otherwise: [`StepOutcome::Stable`]
//!
//! # Example
//!
//! ```
//! use tile_match_core::{find_matches, find_potential_match, validate_swap, Engine, EngineConfig};
//!
//! let mut engine = Engine::new(EngineConfig::default().with_seed(7)).unwrap();
//! let mut grid = engine.create_board();
//! assert!(find_matches(&grid).is_empty());
//!
//! // Fresh boards always have a move.
//! let hint = find_potential_match(&grid).unwrap();
//! let (would_match, swapped) = validate_swap(&grid, hint.swap[0], hint.swap[1]);
//! assert!(would_match);
//! grid = swapped;
//!
//! let cascade = engine.settle(&mut grid);
//! assert!(cascade.stable);
//! assert!(cascade.waves >= 1);
//! assert!(cascade.cleared.total() >= 3);
//! ```

pub mod clear;
pub mod config;
pub mod engine;
pub mod factory;
pub mod gravity;
pub mod grid;
pub mod hint;
pub mod matching;
pub mod rng;
pub mod shuffle;
pub mod snapshot;

pub use tile_match_types as types;

// Re-export commonly used types for convenience
pub use clear::{clear_area, clear_color, clear_matches, ClearReport, ColorTally};
pub use config::{ConfigError, EngineConfig, Palette};
pub use engine::{create_board, Cascade, Engine, StepOutcome};
pub use factory::{IdSource, SequentialIds, TokenFactory};
pub use gravity::apply_gravity_and_refill;
pub use grid::Grid;
pub use hint::{find_potential_match, has_potential_match, validate_swap, PotentialMatch};
pub use matching::{find_matches, has_match};
pub use rng::SimpleRng;
pub use shuffle::{constructive_layout, shuffle_board};
pub use snapshot::{CellSnapshot, GridSnapshot};
