//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no game logic, making them usable in any
//! context (engine, terminal rendering, headless JSON output).
//!
//! # Board Dimensions
//!
//! - **Grid**: square, `GRID_SIZE` x `GRID_SIZE` cells (8 by default)
//! - **Storage**: flat, row-major (`row * size + col`)
//! - **Run**: `MIN_RUN` (3) or more equal colors in a row or column
//!
//! # Engine Limits
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MIN_RUN` | 3 | Shortest run that counts as a match |
//! | `MIN_PALETTE` | 3 | Fewest colors a palette may hold |
//! | `MAX_GRID_SIZE` | 32 | Largest supported grid edge |
//! | `DEFAULT_SHUFFLE_ATTEMPTS` | 32 | Random shuffles tried before the constructive layout |
//! | `DEFAULT_MAX_SETTLE_STEPS` | 10000 | Upper bound on resolution steps in one settle |
//! | `STEP_MS` | 150 | Default pacing between resolution steps in the terminal UI |
//!
//! # Examples
//!
//! ```
//! use tile_match_types::{BoardAction, Cell, Color, Token, TokenId, GRID_SIZE};
//!
//! let color = Color::from_str("RED").unwrap();
//! assert_eq!(color, Color::Red);
//! assert_eq!(color.as_str(), "red");
//!
//! let cell = Cell::Occupied(Token::new(TokenId(7), Color::Blue));
//! assert_eq!(cell.color(), Some(Color::Blue));
//! assert!(Cell::Empty.is_empty());
//!
//! assert_eq!(BoardAction::from_str("hint"), Some(BoardAction::Hint));
//! assert_eq!(GRID_SIZE, 8);
//! ```

use serde::Serialize;

/// Default grid edge length (8x8 board)
pub const GRID_SIZE: usize = 8;

/// Shortest run of equal colors that counts as a match
pub const MIN_RUN: usize = 3;

/// Fewest distinct colors a palette may contain
pub const MIN_PALETTE: usize = 3;

/// Largest grid edge the engine accepts
pub const MAX_GRID_SIZE: usize = 32;

/// Random shuffles tried before falling back to a constructive layout
pub const DEFAULT_SHUFFLE_ATTEMPTS: u32 = 32;

/// Upper bound on resolution steps performed by a single settle
pub const DEFAULT_MAX_SETTLE_STEPS: u32 = 10_000;

/// Default delay between resolution steps in the terminal UI (ms)
pub const STEP_MS: u32 = 150;

/// Token colors.
///
/// The declaration order is the canonical palette order and the index used
/// by per-color tallies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
    Orange,
}

impl Color {
    /// Number of colors
    pub const COUNT: usize = 6;

    /// All colors in canonical order
    pub const ALL: [Color; Color::COUNT] = [
        Color::Red,
        Color::Blue,
        Color::Green,
        Color::Yellow,
        Color::Purple,
        Color::Orange,
    ];

    /// Parse color from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tile_match_types::Color;
    ///
    /// assert_eq!(Color::from_str("purple"), Some(Color::Purple));
    /// assert_eq!(Color::from_str("Orange"), Some(Color::Orange));
    /// assert_eq!(Color::from_str("teal"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "red" => Some(Color::Red),
            "blue" => Some(Color::Blue),
            "green" => Some(Color::Green),
            "yellow" => Some(Color::Yellow),
            "purple" => Some(Color::Purple),
            "orange" => Some(Color::Orange),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Purple => "purple",
            Color::Orange => "orange",
        }
    }

    /// Position in [`Color::ALL`]
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Single-letter tag used in compact dumps and terminal fallbacks
    pub fn letter(&self) -> char {
        match self {
            Color::Red => 'R',
            Color::Blue => 'B',
            Color::Green => 'G',
            Color::Yellow => 'Y',
            Color::Purple => 'P',
            Color::Orange => 'O',
        }
    }
}

/// Opaque token identifier.
///
/// Only presentation layers look at it; matching never does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TokenId(pub u64);

/// A single colored piece occupying one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Token {
    pub id: TokenId,
    pub color: Color,
}

impl Token {
    pub fn new(id: TokenId, color: Color) -> Self {
        Self { id, color }
    }
}

/// A cell on the grid
///
/// - `Empty`: no token (only between a clear and the following refill)
/// - `Occupied(Token)`: the cell owns that token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Token),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn token(&self) -> Option<Token> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(token) => Some(*token),
        }
    }

    pub fn color(&self) -> Option<Color> {
        self.token().map(|t| t.color)
    }
}

impl From<Token> for Cell {
    fn from(token: Token) -> Self {
        Cell::Occupied(token)
    }
}

impl From<Option<Token>> for Cell {
    fn from(token: Option<Token>) -> Self {
        token.map_or(Cell::Empty, Cell::Occupied)
    }
}

/// Player-facing actions
///
/// Used by the terminal input map and the headless driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardAction {
    /// Move the cursor one cell up
    CursorUp,
    /// Move the cursor one cell down
    CursorDown,
    /// Move the cursor one cell left
    CursorLeft,
    /// Move the cursor one cell right
    CursorRight,
    /// Select the cell under the cursor, or swap with the selected one
    Select,
    /// Show the first available move
    Hint,
    /// Clear the 3x3 block around the cursor
    Bomb,
    /// Clear every token sharing the color under the cursor
    Jar,
    /// Start over with a fresh board
    Restart,
}

impl BoardAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tile_match_types::BoardAction;
    ///
    /// assert_eq!(BoardAction::from_str("cursorLeft"), Some(BoardAction::CursorLeft));
    /// assert_eq!(BoardAction::from_str("select"), Some(BoardAction::Select));
    /// assert_eq!(BoardAction::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cursorup" => Some(BoardAction::CursorUp),
            "cursordown" => Some(BoardAction::CursorDown),
            "cursorleft" => Some(BoardAction::CursorLeft),
            "cursorright" => Some(BoardAction::CursorRight),
            "select" => Some(BoardAction::Select),
            "hint" => Some(BoardAction::Hint),
            "bomb" => Some(BoardAction::Bomb),
            "jar" => Some(BoardAction::Jar),
            "restart" => Some(BoardAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            BoardAction::CursorUp => "cursorUp",
            BoardAction::CursorDown => "cursorDown",
            BoardAction::CursorLeft => "cursorLeft",
            BoardAction::CursorRight => "cursorRight",
            BoardAction::Select => "select",
            BoardAction::Hint => "hint",
            BoardAction::Bomb => "bomb",
            BoardAction::Jar => "jar",
            BoardAction::Restart => "restart",
        }
    }
}
