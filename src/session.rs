//! Caller-side board session.
//!
//! A [`Session`] owns one grid plus the [`Engine`] that resolves it, and
//! layers the interactive bits on top: cursor, selection, hint display, and
//! per-session counters. Resolution is paced by the caller: after a swap, a
//! bomb or a jar the session is *resolving* and each [`Session::tick`]
//! performs a single engine step.

use log::{debug, info};

use crate::core::{
    clear_area, clear_color, find_potential_match, validate_swap, Cascade, ColorTally,
    ConfigError, Engine, EngineConfig, Grid, GridSnapshot, StepOutcome,
};
use crate::term::{Overlay, StatusView};
use crate::types::BoardAction;

/// Counters kept for display; the engine itself has no notion of score.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Committed swaps
    pub moves: u32,
    /// Longest chain of clear waves triggered by one action
    pub best_chain: u32,
    /// Stalemate shuffles
    pub shuffles: u32,
    /// Area clears triggered
    pub bombs: u32,
    /// Color clears triggered
    pub jars: u32,
    pub cleared: ColorTally,
}

pub struct Session {
    engine: Engine,
    grid: Grid,
    cursor: usize,
    selected: Option<usize>,
    hint: Option<[usize; 2]>,
    resolving: bool,
    /// Accumulates the resolution currently in progress
    pending: Cascade,
    last_cascade: Option<Cascade>,
    stats: SessionStats,
    message: Option<String>,
}

impl Session {
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        let mut engine = Engine::new(config)?;
        let grid = engine.create_board();
        Ok(Self::with_grid(engine, grid))
    }

    /// Start from a caller-provided grid. If it is not already stable the
    /// session starts out resolving.
    pub fn with_grid(engine: Engine, grid: Grid) -> Self {
        let resolving = !engine.is_stable(&grid);
        Self {
            engine,
            grid,
            cursor: 0,
            selected: None,
            hint: None,
            resolving,
            pending: Cascade::default(),
            last_cascade: None,
            stats: SessionStats::default(),
            message: None,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn hint(&self) -> Option<[usize; 2]> {
        self.hint
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Whether resolution steps are still pending
    pub fn is_resolving(&self) -> bool {
        self.resolving
    }

    /// Take the aggregate of the last finished resolution.
    pub fn take_last_cascade(&mut self) -> Option<Cascade> {
        self.last_cascade.take()
    }

    /// Apply a board action. Returns whether anything changed.
    ///
    /// Board-changing actions are ignored while resolving; cursor movement
    /// is always allowed.
    pub fn apply_action(&mut self, action: BoardAction) -> bool {
        match action {
            BoardAction::CursorUp => self.move_cursor(-1, 0),
            BoardAction::CursorDown => self.move_cursor(1, 0),
            BoardAction::CursorLeft => self.move_cursor(0, -1),
            BoardAction::CursorRight => self.move_cursor(0, 1),
            BoardAction::Restart => {
                self.restart();
                true
            }
            _ if self.resolving => false,
            BoardAction::Select => self.select(),
            BoardAction::Hint => self.show_hint(),
            BoardAction::Bomb => self.bomb(self.cursor),
            BoardAction::Jar => self.jar(self.cursor),
        }
    }

    /// Attempt a player swap. On success the grid keeps the swapped
    /// arrangement and resolution begins; otherwise nothing changes.
    pub fn try_swap(&mut self, a: usize, b: usize) -> bool {
        if self.resolving || !self.grid.is_adjacent(a, b) {
            return false;
        }
        let (ok, swapped) = validate_swap(&self.grid, a, b);
        if !ok {
            self.message = Some("no match there".to_string());
            return false;
        }
        self.grid = swapped;
        self.stats.moves += 1;
        self.begin_resolution();
        true
    }

    /// Clear the 3x3 area around `center` and start resolving.
    pub fn bomb(&mut self, center: usize) -> bool {
        if self.resolving {
            return false;
        }
        let report = clear_area(&mut self.grid, center);
        if report.is_empty() {
            return false;
        }
        self.stats.bombs += 1;
        self.stats.cleared.merge(&report.tally);
        self.begin_resolution();
        true
    }

    /// Clear every token sharing the color at `index` and start resolving.
    pub fn jar(&mut self, index: usize) -> bool {
        if self.resolving {
            return false;
        }
        let Some(color) = self.grid.color(index) else {
            return false;
        };
        let report = clear_color(&mut self.grid, color);
        self.stats.jars += 1;
        self.stats.cleared.merge(&report.tally);
        self.begin_resolution();
        true
    }

    /// Perform one resolution step, if one is pending.
    pub fn tick(&mut self) -> Option<StepOutcome> {
        if !self.resolving {
            return None;
        }
        let outcome = self.engine.step(&mut self.grid);
        if outcome.is_stable() {
            self.finish_resolution();
            return Some(outcome);
        }
        match &outcome {
            StepOutcome::Cleared(report) => {
                self.pending.waves += 1;
                self.pending.cleared.merge(&report.tally);
                self.stats.cleared.merge(&report.tally);
            }
            StepOutcome::Refilled => {}
            StepOutcome::Shuffled => {
                self.pending.shuffled = true;
                self.stats.shuffles += 1;
                self.message = Some("no moves left, shuffled".to_string());
            }
            StepOutcome::Stable => {}
        }
        self.pending.steps += 1;
        Some(outcome)
    }

    /// Step until the grid is stable, bounded by the engine's settle limit.
    pub fn resolve(&mut self) -> Option<Cascade> {
        let limit = self.engine.config().max_settle_steps;
        let mut steps = 0;
        while self.resolving && steps <= limit {
            self.tick();
            steps += 1;
        }
        self.take_last_cascade()
    }

    pub fn restart(&mut self) {
        self.grid = self.engine.create_board();
        self.selected = None;
        self.hint = None;
        self.resolving = false;
        self.pending = Cascade::default();
        self.last_cascade = None;
        self.stats = SessionStats::default();
        self.message = Some("new board".to_string());
        info!("session restarted");
    }

    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot::from_grid(&self.grid)
    }

    pub fn overlay(&self) -> Overlay {
        Overlay {
            cursor: Some(self.cursor),
            selected: self.selected,
            hint: self.hint,
        }
    }

    pub fn status(&self) -> StatusView {
        StatusView {
            moves: self.stats.moves,
            best_chain: self.stats.best_chain,
            shuffles: self.stats.shuffles,
            cleared: self.stats.cleared,
            message: self.message.clone(),
            busy: self.resolving,
        }
    }

    fn move_cursor(&mut self, d_row: isize, d_col: isize) -> bool {
        let size = self.grid.size();
        let (row, col) = self.grid.row_col(self.cursor);
        let row = row.saturating_add_signed(d_row).min(size - 1);
        let col = col.saturating_add_signed(d_col).min(size - 1);
        let next = self.grid.index(row, col);
        let moved = next != self.cursor;
        self.cursor = next;
        moved
    }

    fn select(&mut self) -> bool {
        let cursor = self.cursor;
        match self.selected {
            None => self.selected = Some(cursor),
            Some(sel) if sel == cursor => self.selected = None,
            Some(sel) if self.grid.is_adjacent(sel, cursor) => {
                self.selected = None;
                self.try_swap(sel, cursor);
            }
            Some(_) => self.selected = Some(cursor),
        }
        true
    }

    fn show_hint(&mut self) -> bool {
        self.hint = find_potential_match(&self.grid).map(|m| m.swap);
        if self.hint.is_none() {
            self.message = Some("no move available".to_string());
        }
        true
    }

    fn begin_resolution(&mut self) {
        self.resolving = true;
        self.hint = None;
        self.message = None;
        self.pending = Cascade::default();
    }

    fn finish_resolution(&mut self) {
        self.resolving = false;
        let mut cascade = std::mem::take(&mut self.pending);
        cascade.stable = true;
        self.stats.best_chain = self.stats.best_chain.max(cascade.waves);
        if cascade.waves > 1 {
            self.message = Some(format!("chain x{}", cascade.waves));
        }
        debug!(
            "resolution finished: {} wave(s), {} token(s) cleared",
            cascade.waves,
            cascade.cleared.total()
        );
        self.last_cascade = Some(cascade);
    }
}
